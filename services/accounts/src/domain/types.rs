use chrono::{DateTime, Utc};
use uuid::Uuid;

use shamba_domain::user::UserKind;

/// Account owned by the accounts service. `password_hash` is the argon2 PHC
/// string; it never crosses the API boundary.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub kind: UserKind,
    pub must_reset_password: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Agrovet business profile, one-to-one with a user of kind agrovet.
#[derive(Debug, Clone)]
pub struct AgrovetProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_name: String,
    pub registration_number: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Farmer profile, one-to-one with a user of kind farmer. `registered_by`
/// is fixed at creation.
#[derive(Debug, Clone)]
pub struct FarmerProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub registered_by: Uuid,
    pub farm_location: String,
    pub created_at: DateTime<Utc>,
}

/// Credential-delivery message for a freshly registered farmer. The only
/// place the plaintext temporary password ever appears.
#[derive(Debug, Clone)]
pub struct FarmerCredentialMail {
    pub to: String,
    pub first_name: String,
    pub last_name: String,
    pub business_name: String,
    pub temp_password: String,
    pub login_url: String,
}

/// Minimal shape check for login emails: one `@` with non-empty local part
/// and a dot-carrying domain. Deliverability is the mail transport's problem.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if domain.contains('@') {
        return false;
    }
    domain.split('.').count() >= 2 && !domain.starts_with('.') && !domain.ends_with('.')
}
