use chrono::Utc;
use rand::RngExt;
use uuid::Uuid;

use shamba_domain::credential::{
    PasswordPolicyError, TEMP_PASSWORD_CHARSET, TEMP_PASSWORD_LEN, check_password_pair,
};
use shamba_domain::user::UserKind;

use crate::domain::repository::{
    AgrovetRepository, CredentialMailer, FarmerRepository, PasswordHashPort, UserRepository,
};
use crate::domain::types::{AgrovetProfile, FarmerCredentialMail, FarmerProfile, User, validate_email};
use crate::error::AccountsServiceError;

/// Draw a temporary password: TEMP_PASSWORD_LEN characters, independently and
/// uniformly from the 70-symbol alphabet. `rand::rng()` is the thread-local
/// CSPRNG; a seedable statistical generator must not be used here.
pub fn generate_temp_password() -> String {
    let mut rng = rand::rng();
    (0..TEMP_PASSWORD_LEN)
        .map(|_| TEMP_PASSWORD_CHARSET[rng.random_range(0..TEMP_PASSWORD_CHARSET.len())] as char)
        .collect()
}

fn require(field: &'static str, value: &str) -> Result<(), AccountsServiceError> {
    if value.trim().is_empty() {
        return Err(AccountsServiceError::MissingField(field));
    }
    Ok(())
}

fn map_policy_error(e: PasswordPolicyError) -> AccountsServiceError {
    match e {
        PasswordPolicyError::Mismatch => AccountsServiceError::PasswordMismatch,
        PasswordPolicyError::TooShort => AccountsServiceError::PasswordTooShort,
    }
}

// ── RegisterAgrovet ──────────────────────────────────────────────────────────

pub struct RegisterAgrovetInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password2: String,
    pub business_name: String,
    pub registration_number: String,
    pub location: String,
}

pub struct RegisterAgrovetUseCase<U, A, H>
where
    U: UserRepository,
    A: AgrovetRepository,
    H: PasswordHashPort,
{
    pub users: U,
    pub agrovets: A,
    pub hasher: H,
}

impl<U, A, H> RegisterAgrovetUseCase<U, A, H>
where
    U: UserRepository,
    A: AgrovetRepository,
    H: PasswordHashPort,
{
    pub async fn execute(
        &self,
        input: RegisterAgrovetInput,
    ) -> Result<(User, AgrovetProfile), AccountsServiceError> {
        require("email", &input.email)?;
        require("first_name", &input.first_name)?;
        require("last_name", &input.last_name)?;
        require("business_name", &input.business_name)?;
        require("registration_number", &input.registration_number)?;
        require("location", &input.location)?;
        if !validate_email(&input.email) {
            return Err(AccountsServiceError::InvalidEmail);
        }
        check_password_pair(&input.password, &input.password2).map_err(map_policy_error)?;

        // Pre-checks give precise field errors; the unique indexes remain the
        // backstop under concurrent registration.
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AccountsServiceError::EmailTaken);
        }
        if self
            .agrovets
            .registration_number_exists(&input.registration_number)
            .await?
        {
            return Err(AccountsServiceError::RegistrationNumberTaken);
        }

        let password_hash = self.hasher.hash(&input.password).await?;
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash,
            kind: UserKind::Agrovet,
            must_reset_password: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let profile = AgrovetProfile {
            id: Uuid::now_v7(),
            user_id: user.id,
            business_name: input.business_name,
            registration_number: input.registration_number,
            location: input.location,
            created_at: now,
        };
        self.agrovets.create_with_user(&user, &profile).await?;
        Ok((user, profile))
    }
}

// ── RegisterFarmer ───────────────────────────────────────────────────────────

pub struct RegisterFarmerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub farm_location: String,
}

pub struct RegisterFarmerOutput {
    pub user: User,
    pub farmer: FarmerProfile,
    pub registrar: AgrovetProfile,
    pub registrar_user: User,
}

pub struct RegisterFarmerUseCase<U, A, F, H, M>
where
    U: UserRepository,
    A: AgrovetRepository,
    F: FarmerRepository,
    H: PasswordHashPort,
    M: CredentialMailer,
{
    pub users: U,
    pub agrovets: A,
    pub farmers: F,
    pub hasher: H,
    pub mailer: M,
    pub login_url: String,
}

impl<U, A, F, H, M> RegisterFarmerUseCase<U, A, F, H, M>
where
    U: UserRepository,
    A: AgrovetRepository,
    F: FarmerRepository,
    H: PasswordHashPort,
    M: CredentialMailer,
{
    pub async fn execute(
        &self,
        caller_user_id: Uuid,
        input: RegisterFarmerInput,
    ) -> Result<RegisterFarmerOutput, AccountsServiceError> {
        let caller = self
            .users
            .find_by_id(caller_user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(AccountsServiceError::InvalidToken)?;
        let registrar = self
            .agrovets
            .find_by_user_id(caller.id)
            .await?
            .ok_or(AccountsServiceError::Forbidden)?;

        require("first_name", &input.first_name)?;
        require("last_name", &input.last_name)?;
        require("email", &input.email)?;
        require("farm_location", &input.farm_location)?;
        if !validate_email(&input.email) {
            return Err(AccountsServiceError::InvalidEmail);
        }
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AccountsServiceError::EmailTaken);
        }

        let temp_password = generate_temp_password();
        let password_hash = self.hasher.hash(&temp_password).await?;
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash,
            kind: UserKind::Farmer,
            must_reset_password: true,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let farmer = FarmerProfile {
            id: Uuid::now_v7(),
            user_id: user.id,
            registered_by: registrar.id,
            farm_location: input.farm_location,
            created_at: now,
        };
        self.farmers.create_with_user(&user, &farmer).await?;

        // Credential creation is authoritative: a failed delivery is logged
        // and the farmer account stands. The plaintext leaves scope here.
        let mail = FarmerCredentialMail {
            to: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            business_name: registrar.business_name.clone(),
            temp_password,
            login_url: self.login_url.clone(),
        };
        if let Err(e) = self.mailer.send_farmer_credentials(&mail).await {
            tracing::warn!(
                error = %e,
                farmer_email = %mail.to,
                "credential mail delivery failed; account was still created"
            );
        }

        Ok(RegisterFarmerOutput {
            user,
            farmer,
            registrar,
            registrar_user: caller,
        })
    }
}
