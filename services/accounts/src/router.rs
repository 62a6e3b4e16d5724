use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use shamba_core::health::{healthz, readyz};
use shamba_core::middleware::request_id_layer;

use crate::handlers::{
    account::{delete_account, profile, reset_password},
    dashboard::{agrovet_dashboard, farmer_dashboard},
    registration::{register_agrovet, register_farmer},
    token::{login, refresh_token},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Authentication
        .route("/api/auth/register/agrovet/", post(register_agrovet))
        .route("/api/auth/login/", post(login))
        .route("/api/auth/token/refresh/", post(refresh_token))
        .route("/api/auth/password-reset/", post(reset_password))
        .route("/api/auth/profile/", get(profile))
        // Agrovet
        .route("/api/agrovet/dashboard/", get(agrovet_dashboard))
        .route("/api/agrovet/register-farmer/", post(register_farmer))
        .route("/api/agrovet/account/", delete(delete_account))
        // Farmer
        .route("/api/farmer/dashboard/", get(farmer_dashboard))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
