#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{AgrovetProfile, FarmerCredentialMail, FarmerProfile, User};
use crate::error::AccountsServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountsServiceError>;

    /// Replace the stored hash and set the reset flag in one update.
    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
        must_reset_password: bool,
    ) -> Result<(), AccountsServiceError>;
}

/// Repository for agrovet business profiles.
pub trait AgrovetRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AgrovetProfile>, AccountsServiceError>;

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<AgrovetProfile>, AccountsServiceError>;

    async fn registration_number_exists(
        &self,
        registration_number: &str,
    ) -> Result<bool, AccountsServiceError>;

    /// Atomically create the user and its agrovet profile. A lost
    /// unique-constraint race surfaces as `EmailTaken` /
    /// `RegistrationNumberTaken`, same as the usecase pre-check.
    async fn create_with_user(
        &self,
        user: &User,
        profile: &AgrovetProfile,
    ) -> Result<(), AccountsServiceError>;

    /// Delete the agrovet, its farmers and the farmer users in one
    /// transaction. The users ← farmers foreign key points the wrong way for
    /// the database cascade to reach farmer users on its own.
    async fn delete_with_farmers(
        &self,
        agrovet: &AgrovetProfile,
    ) -> Result<(), AccountsServiceError>;
}

/// Repository for farmer profiles.
pub trait FarmerRepository: Send + Sync {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<FarmerProfile>, AccountsServiceError>;

    /// Atomically create the user and its farmer profile.
    async fn create_with_user(
        &self,
        user: &User,
        profile: &FarmerProfile,
    ) -> Result<(), AccountsServiceError>;

    /// All farmers registered by an agrovet, with their user records.
    async fn list_by_agrovet(
        &self,
        agrovet_id: Uuid,
    ) -> Result<Vec<(FarmerProfile, User)>, AccountsServiceError>;
}

/// Port for the password-hash primitive.
pub trait PasswordHashPort: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, AccountsServiceError>;
    async fn verify(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, AccountsServiceError>;
}

/// Port for the outbound mail transport.
pub trait CredentialMailer: Send + Sync {
    async fn send_farmer_credentials(
        &self,
        mail: &FarmerCredentialMail,
    ) -> Result<(), AccountsServiceError>;
}
