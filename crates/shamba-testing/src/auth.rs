//! Bearer-token helpers for integration tests.
//!
//! Handlers authenticate via `Authorization: Bearer <jwt>`. In tests,
//! `TestToken` signs a short-lived token with the test secret so no real
//! login flow is needed.

use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use shamba_auth_types::token::JwtClaims;
use shamba_domain::user::UserKind;

/// Configurable identity minted into test requests.
pub struct TestToken {
    pub user_id: Uuid,
    pub kind: UserKind,
    pub secret: String,
}

impl TestToken {
    pub fn new(user_id: Uuid, kind: UserKind, secret: &str) -> Self {
        Self {
            user_id,
            kind,
            secret: secret.to_owned(),
        }
    }

    /// Sign a token valid for one hour.
    pub fn sign(&self) -> String {
        let exp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system clock before UNIX epoch")
            .as_secs()
            + 3600;
        let claims = JwtClaims {
            sub: self.user_id.to_string(),
            kind: self.kind,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .expect("failed to sign test token")
    }
}
