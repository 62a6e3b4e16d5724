use axum::{Json, extract::State};
use serde::Serialize;

use shamba_auth_types::identity::Identity;
use shamba_domain::user::UserKind;

use crate::error::AccountsServiceError;
use crate::handlers::projections::{AgrovetResponse, FarmerDetailResponse, FarmerResponse};
use crate::state::AppState;
use crate::usecase::dashboard::{AgrovetDashboardUseCase, FarmerDashboardUseCase};

// ── GET /api/agrovet/dashboard/ ──────────────────────────────────────────────

#[derive(Serialize)]
pub struct AgrovetDashboardResponse {
    pub agrovet: AgrovetResponse,
    pub farmers: Vec<FarmerResponse>,
    pub total_farmers: usize,
}

pub async fn agrovet_dashboard(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<AgrovetDashboardResponse>, AccountsServiceError> {
    if identity.kind != UserKind::Agrovet {
        return Err(AccountsServiceError::Forbidden);
    }
    let usecase = AgrovetDashboardUseCase {
        users: state.user_repo(),
        agrovets: state.agrovet_repo(),
        farmers: state.farmer_repo(),
    };
    let out = usecase.execute(identity.user_id).await?;
    let farmers: Vec<FarmerResponse> = out
        .farmers
        .iter()
        .map(|(profile, user)| FarmerResponse::new(profile, user))
        .collect();
    Ok(Json(AgrovetDashboardResponse {
        agrovet: AgrovetResponse::new(&out.agrovet, &out.user),
        total_farmers: farmers.len(),
        farmers,
    }))
}

// ── GET /api/farmer/dashboard/ ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct FarmerDashboardResponse {
    pub farmer: FarmerDetailResponse,
}

pub async fn farmer_dashboard(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<FarmerDashboardResponse>, AccountsServiceError> {
    if identity.kind != UserKind::Farmer {
        return Err(AccountsServiceError::Forbidden);
    }
    let usecase = FarmerDashboardUseCase {
        users: state.user_repo(),
        agrovets: state.agrovet_repo(),
        farmers: state.farmer_repo(),
    };
    let out = usecase.execute(identity.user_id).await?;
    Ok(Json(FarmerDashboardResponse {
        farmer: FarmerDetailResponse::new(
            &out.farmer,
            &out.user,
            &out.registrar,
            &out.registrar_user,
        ),
    }))
}
