use uuid::Uuid;

use shamba_domain::credential::{PasswordPolicyError, check_password_pair};

use crate::domain::repository::{PasswordHashPort, UserRepository};
use crate::error::AccountsServiceError;

// ── ResetPassword ────────────────────────────────────────────────────────────

pub struct ResetPasswordInput {
    pub new_password: String,
    pub new_password2: String,
}

pub struct ResetPasswordUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHashPort,
{
    pub users: U,
    pub hasher: H,
}

impl<U, H> ResetPasswordUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHashPort,
{
    /// Replace the forced temporary credential. Only legal while the reset
    /// flag is set; clears it on success.
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: ResetPasswordInput,
    ) -> Result<(), AccountsServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(AccountsServiceError::InvalidToken)?;

        if !user.must_reset_password {
            return Err(AccountsServiceError::ResetNotRequired);
        }

        check_password_pair(&input.new_password, &input.new_password2).map_err(|e| match e {
            PasswordPolicyError::Mismatch => AccountsServiceError::PasswordMismatch,
            PasswordPolicyError::TooShort => AccountsServiceError::PasswordTooShort,
        })?;

        let password_hash = self.hasher.hash(&input.new_password).await?;
        self.users
            .update_password(user.id, &password_hash, false)
            .await
    }
}
