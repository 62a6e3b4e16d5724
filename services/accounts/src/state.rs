use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use shamba_auth_types::identity::JwtSecret;

use crate::infra::db::{DbAgrovetRepository, DbFarmerRepository, DbUserRepository};
use crate::infra::email::HttpCredentialMailer;
use crate::infra::hash::Argon2HashPort;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub mailer: HttpCredentialMailer,
    pub login_url: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn agrovet_repo(&self) -> DbAgrovetRepository {
        DbAgrovetRepository {
            db: self.db.clone(),
        }
    }

    pub fn farmer_repo(&self) -> DbFarmerRepository {
        DbFarmerRepository {
            db: self.db.clone(),
        }
    }

    pub fn password_hasher(&self) -> Argon2HashPort {
        Argon2HashPort
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> JwtSecret {
        JwtSecret(state.jwt_secret.clone())
    }
}
