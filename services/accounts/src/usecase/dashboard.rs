use anyhow::anyhow;
use uuid::Uuid;

use crate::domain::repository::{AgrovetRepository, FarmerRepository, UserRepository};
use crate::domain::types::{AgrovetProfile, FarmerProfile, User};
use crate::error::AccountsServiceError;

// ── Profile ──────────────────────────────────────────────────────────────────

pub struct ProfileUseCase<U>
where
    U: UserRepository,
{
    pub users: U,
}

impl<U> ProfileUseCase<U>
where
    U: UserRepository,
{
    pub async fn execute(&self, user_id: Uuid) -> Result<User, AccountsServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(AccountsServiceError::InvalidToken)
    }
}

// ── AgrovetDashboard ─────────────────────────────────────────────────────────

pub struct AgrovetDashboardOutput {
    pub user: User,
    pub agrovet: AgrovetProfile,
    pub farmers: Vec<(FarmerProfile, User)>,
}

pub struct AgrovetDashboardUseCase<U, A, F>
where
    U: UserRepository,
    A: AgrovetRepository,
    F: FarmerRepository,
{
    pub users: U,
    pub agrovets: A,
    pub farmers: F,
}

impl<U, A, F> AgrovetDashboardUseCase<U, A, F>
where
    U: UserRepository,
    A: AgrovetRepository,
    F: FarmerRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<AgrovetDashboardOutput, AccountsServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(AccountsServiceError::InvalidToken)?;
        let agrovet = self
            .agrovets
            .find_by_user_id(user.id)
            .await?
            .ok_or(AccountsServiceError::Forbidden)?;
        let farmers = self.farmers.list_by_agrovet(agrovet.id).await?;
        Ok(AgrovetDashboardOutput {
            user,
            agrovet,
            farmers,
        })
    }
}

// ── FarmerDashboard ──────────────────────────────────────────────────────────

pub struct FarmerDashboardOutput {
    pub user: User,
    pub farmer: FarmerProfile,
    pub registrar: AgrovetProfile,
    pub registrar_user: User,
}

pub struct FarmerDashboardUseCase<U, A, F>
where
    U: UserRepository,
    A: AgrovetRepository,
    F: FarmerRepository,
{
    pub users: U,
    pub agrovets: A,
    pub farmers: F,
}

impl<U, A, F> FarmerDashboardUseCase<U, A, F>
where
    U: UserRepository,
    A: AgrovetRepository,
    F: FarmerRepository,
{
    pub async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<FarmerDashboardOutput, AccountsServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(AccountsServiceError::InvalidToken)?;

        // Deliberate lockout: nothing farmer-facing works until the issued
        // credential has been replaced.
        if user.must_reset_password {
            return Err(AccountsServiceError::ResetRequired);
        }

        let farmer = self
            .farmers
            .find_by_user_id(user.id)
            .await?
            .ok_or(AccountsServiceError::Forbidden)?;

        // The registrar is FK-guaranteed; its absence is data corruption.
        let registrar = self
            .agrovets
            .find_by_id(farmer.registered_by)
            .await?
            .ok_or_else(|| AccountsServiceError::Internal(anyhow!("registrar missing")))?;
        let registrar_user = self
            .users
            .find_by_id(registrar.user_id)
            .await?
            .ok_or_else(|| AccountsServiceError::Internal(anyhow!("registrar user missing")))?;

        Ok(FarmerDashboardOutput {
            user,
            farmer,
            registrar,
            registrar_user,
        })
    }
}

// ── DeleteAgrovetAccount ─────────────────────────────────────────────────────

pub struct DeleteAgrovetAccountUseCase<U, A>
where
    U: UserRepository,
    A: AgrovetRepository,
{
    pub users: U,
    pub agrovets: A,
}

impl<U, A> DeleteAgrovetAccountUseCase<U, A>
where
    U: UserRepository,
    A: AgrovetRepository,
{
    /// Close the caller's agrovet account, taking every farmer it registered
    /// (and their users) down with it.
    pub async fn execute(&self, user_id: Uuid) -> Result<(), AccountsServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(AccountsServiceError::InvalidToken)?;
        let agrovet = self
            .agrovets
            .find_by_user_id(user.id)
            .await?
            .ok_or(AccountsServiceError::Forbidden)?;
        self.agrovets.delete_with_farmers(&agrovet).await
    }
}
