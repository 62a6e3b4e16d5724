use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use shamba_auth_types::identity::Identity;
use shamba_domain::user::UserKind;

use crate::error::AccountsServiceError;
use crate::handlers::projections::UserResponse;
use crate::state::AppState;
use crate::usecase::dashboard::{DeleteAgrovetAccountUseCase, ProfileUseCase};
use crate::usecase::password::{ResetPasswordInput, ResetPasswordUseCase};

// ── POST /api/auth/password-reset/ ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
    pub new_password2: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn reset_password(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AccountsServiceError> {
    let usecase = ResetPasswordUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
    };
    usecase
        .execute(
            identity.user_id,
            ResetPasswordInput {
                new_password: body.new_password,
                new_password2: body.new_password2,
            },
        )
        .await?;
    Ok(Json(MessageResponse {
        message: "Password reset successfully",
    }))
}

// ── GET /api/auth/profile/ ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

pub async fn profile(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AccountsServiceError> {
    let usecase = ProfileUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(ProfileResponse {
        user: UserResponse::from(&user),
    }))
}

// ── DELETE /api/agrovet/account/ ─────────────────────────────────────────────

pub async fn delete_account(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<StatusCode, AccountsServiceError> {
    if identity.kind != UserKind::Agrovet {
        return Err(AccountsServiceError::Forbidden);
    }
    let usecase = DeleteAgrovetAccountUseCase {
        users: state.user_repo(),
        agrovets: state.agrovet_repo(),
    };
    usecase.execute(identity.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
