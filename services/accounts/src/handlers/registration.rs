use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use shamba_auth_types::identity::Identity;
use shamba_domain::user::UserKind;

use crate::error::AccountsServiceError;
use crate::handlers::projections::{FarmerDetailResponse, UserResponse};
use crate::state::AppState;
use crate::usecase::registration::{
    RegisterAgrovetInput, RegisterAgrovetUseCase, RegisterFarmerInput, RegisterFarmerUseCase,
};

// ── POST /api/auth/register/agrovet/ ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterAgrovetRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password2: String,
    pub business_name: String,
    pub registration_number: String,
    pub location: String,
}

pub async fn register_agrovet(
    State(state): State<AppState>,
    Json(body): Json<RegisterAgrovetRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AccountsServiceError> {
    let usecase = RegisterAgrovetUseCase {
        users: state.user_repo(),
        agrovets: state.agrovet_repo(),
        hasher: state.password_hasher(),
    };
    let (user, _profile) = usecase
        .execute(RegisterAgrovetInput {
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            password: body.password,
            password2: body.password2,
            business_name: body.business_name,
            registration_number: body.registration_number,
            location: body.location,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

// ── POST /api/agrovet/register-farmer/ ───────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterFarmerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub farm_location: String,
}

#[derive(Serialize)]
pub struct RegisterFarmerResponse {
    pub message: &'static str,
    pub farmer: FarmerDetailResponse,
}

pub async fn register_farmer(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<RegisterFarmerRequest>,
) -> Result<(StatusCode, Json<RegisterFarmerResponse>), AccountsServiceError> {
    if identity.kind != UserKind::Agrovet {
        return Err(AccountsServiceError::Forbidden);
    }
    let usecase = RegisterFarmerUseCase {
        users: state.user_repo(),
        agrovets: state.agrovet_repo(),
        farmers: state.farmer_repo(),
        hasher: state.password_hasher(),
        mailer: state.mailer.clone(),
        login_url: state.login_url.clone(),
    };
    let out = usecase
        .execute(
            identity.user_id,
            RegisterFarmerInput {
                first_name: body.first_name,
                last_name: body.last_name,
                email: body.email,
                farm_location: body.farm_location,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterFarmerResponse {
            message: "Farmer registered successfully",
            farmer: FarmerDetailResponse::new(
                &out.farmer,
                &out.user,
                &out.registrar,
                &out.registrar_user,
            ),
        }),
    ))
}
