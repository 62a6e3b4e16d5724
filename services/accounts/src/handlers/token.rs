use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::AccountsServiceError;
use crate::handlers::projections::UserResponse;
use crate::state::AppState;
use crate::usecase::token::{LoginInput, LoginUseCase, RefreshTokenUseCase};

// ── POST /api/auth/login/ ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserResponse,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AccountsServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        hasher: state.password_hasher(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        access: out.access_token,
        refresh: out.refresh_token,
        user: UserResponse::from(&out.user),
    }))
}

// ── POST /api/auth/token/refresh/ ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh: String,
}

#[derive(Serialize)]
pub struct RefreshTokenResponse {
    pub access: String,
}

pub async fn refresh_token(
    State(state): State<AppState>,
    Json(body): Json<RefreshTokenRequest>,
) -> Result<Json<RefreshTokenResponse>, AccountsServiceError> {
    let usecase = RefreshTokenUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase.execute(&body.refresh).await?;
    Ok(Json(RefreshTokenResponse {
        access: out.access_token,
    }))
}
