//! Public-safe response shapes shared by several handlers.
//!
//! `UserResponse` deliberately omits the password hash and the active flag;
//! it is the only user shape that ever leaves the service.

use serde::Serialize;

use shamba_domain::user::UserKind;

use crate::domain::types::{AgrovetProfile, FarmerProfile, User};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserKind,
    pub must_reset_password: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            user_type: user.kind,
            must_reset_password: user.must_reset_password,
        }
    }
}

#[derive(Serialize)]
pub struct AgrovetResponse {
    pub id: String,
    pub user: UserResponse,
    pub business_name: String,
    pub registration_number: String,
    pub location: String,
    #[serde(serialize_with = "shamba_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl AgrovetResponse {
    pub fn new(profile: &AgrovetProfile, user: &User) -> Self {
        Self {
            id: profile.id.to_string(),
            user: user.into(),
            business_name: profile.business_name.clone(),
            registration_number: profile.registration_number.clone(),
            location: profile.location.clone(),
            created_at: profile.created_at,
        }
    }
}

/// Farmer entry as listed on the registrar's dashboard.
#[derive(Serialize)]
pub struct FarmerResponse {
    pub id: String,
    pub user: UserResponse,
    pub farm_location: String,
    #[serde(serialize_with = "shamba_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl FarmerResponse {
    pub fn new(profile: &FarmerProfile, user: &User) -> Self {
        Self {
            id: profile.id.to_string(),
            user: user.into(),
            farm_location: profile.farm_location.clone(),
            created_at: profile.created_at,
        }
    }
}

/// Farmer with its registrar attached — the farmer's own view.
#[derive(Serialize)]
pub struct FarmerDetailResponse {
    pub id: String,
    pub user: UserResponse,
    pub registered_by: AgrovetResponse,
    pub farm_location: String,
    #[serde(serialize_with = "shamba_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl FarmerDetailResponse {
    pub fn new(
        profile: &FarmerProfile,
        user: &User,
        registrar: &AgrovetProfile,
        registrar_user: &User,
    ) -> Self {
        Self {
            id: profile.id.to_string(),
            user: user.into(),
            registered_by: AgrovetResponse::new(registrar, registrar_user),
            farm_location: profile.farm_location.clone(),
            created_at: profile.created_at,
        }
    }
}
