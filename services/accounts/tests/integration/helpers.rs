use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use shamba_accounts::domain::repository::{
    AgrovetRepository, CredentialMailer, FarmerRepository, PasswordHashPort, UserRepository,
};
use shamba_accounts::domain::types::{AgrovetProfile, FarmerCredentialMail, FarmerProfile, User};
use shamba_accounts::error::AccountsServiceError;
use shamba_accounts::usecase::registration::RegisterFarmerInput;
use shamba_domain::user::UserKind;

pub const TEST_JWT_SECRET: &str = "integration-test-jwt-secret";

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the internal user list for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountsServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
        must_reset_password: bool,
    ) -> Result<(), AccountsServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.password_hash = password_hash.to_owned();
            user.must_reset_password = must_reset_password;
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

// ── MockAgrovetRepo ──────────────────────────────────────────────────────────

/// Agrovet repository mock. `with_cascade` shares the user and farmer stores
/// so `delete_with_farmers` can mirror the production cascade semantics.
#[derive(Clone)]
pub struct MockAgrovetRepo {
    pub profiles: Arc<Mutex<Vec<AgrovetProfile>>>,
    cascade_users: Option<Arc<Mutex<Vec<User>>>>,
    cascade_farmers: Option<Arc<Mutex<Vec<(FarmerProfile, User)>>>>,
}

impl MockAgrovetRepo {
    pub fn new(profiles: Vec<AgrovetProfile>) -> Self {
        Self {
            profiles: Arc::new(Mutex::new(profiles)),
            cascade_users: None,
            cascade_farmers: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn with_cascade(
        profiles: Vec<AgrovetProfile>,
        users: Arc<Mutex<Vec<User>>>,
        farmers: Arc<Mutex<Vec<(FarmerProfile, User)>>>,
    ) -> Self {
        Self {
            profiles: Arc::new(Mutex::new(profiles)),
            cascade_users: Some(users),
            cascade_farmers: Some(farmers),
        }
    }
}

impl AgrovetRepository for MockAgrovetRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AgrovetProfile>, AccountsServiceError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<AgrovetProfile>, AccountsServiceError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn registration_number_exists(
        &self,
        registration_number: &str,
    ) -> Result<bool, AccountsServiceError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.registration_number == registration_number))
    }

    async fn create_with_user(
        &self,
        _user: &User,
        profile: &AgrovetProfile,
    ) -> Result<(), AccountsServiceError> {
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn delete_with_farmers(
        &self,
        agrovet: &AgrovetProfile,
    ) -> Result<(), AccountsServiceError> {
        let farmer_user_ids: Vec<Uuid> = match &self.cascade_farmers {
            Some(farmers) => {
                let mut farmers = farmers.lock().unwrap();
                let ids = farmers
                    .iter()
                    .filter(|(f, _)| f.registered_by == agrovet.id)
                    .map(|(f, _)| f.user_id)
                    .collect();
                farmers.retain(|(f, _)| f.registered_by != agrovet.id);
                ids
            }
            None => vec![],
        };
        if let Some(users) = &self.cascade_users {
            users
                .lock()
                .unwrap()
                .retain(|u| u.id != agrovet.user_id && !farmer_user_ids.contains(&u.id));
        }
        self.profiles.lock().unwrap().retain(|p| p.id != agrovet.id);
        Ok(())
    }
}

// ── MockFarmerRepo ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockFarmerRepo {
    pub farmers: Arc<Mutex<Vec<(FarmerProfile, User)>>>,
    pub created: Arc<Mutex<Vec<(User, FarmerProfile)>>>,
}

impl MockFarmerRepo {
    pub fn new(farmers: Vec<(FarmerProfile, User)>) -> Self {
        Self {
            farmers: Arc::new(Mutex::new(farmers)),
            created: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn recording(created: Arc<Mutex<Vec<(User, FarmerProfile)>>>) -> Self {
        Self {
            farmers: Arc::new(Mutex::new(vec![])),
            created,
        }
    }

    /// Shared handle to the farmer store for cascade assertions.
    pub fn farmers_handle(&self) -> Arc<Mutex<Vec<(FarmerProfile, User)>>> {
        Arc::clone(&self.farmers)
    }
}

impl FarmerRepository for MockFarmerRepo {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<FarmerProfile>, AccountsServiceError> {
        Ok(self
            .farmers
            .lock()
            .unwrap()
            .iter()
            .find(|(f, _)| f.user_id == user_id)
            .map(|(f, _)| f.clone()))
    }

    async fn create_with_user(
        &self,
        user: &User,
        profile: &FarmerProfile,
    ) -> Result<(), AccountsServiceError> {
        self.farmers
            .lock()
            .unwrap()
            .push((profile.clone(), user.clone()));
        self.created
            .lock()
            .unwrap()
            .push((user.clone(), profile.clone()));
        Ok(())
    }

    async fn list_by_agrovet(
        &self,
        agrovet_id: Uuid,
    ) -> Result<Vec<(FarmerProfile, User)>, AccountsServiceError> {
        Ok(self
            .farmers
            .lock()
            .unwrap()
            .iter()
            .filter(|(f, _)| f.registered_by == agrovet_id)
            .cloned()
            .collect())
    }
}

// ── PlainHashPort ────────────────────────────────────────────────────────────

/// Identity "hash" for tests that assert control flow, not cryptography.
#[derive(Clone, Copy)]
pub struct PlainHashPort;

impl PasswordHashPort for PlainHashPort {
    async fn hash(&self, password: &str) -> Result<String, AccountsServiceError> {
        Ok(password.to_owned())
    }

    async fn verify(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, AccountsServiceError> {
        Ok(password == password_hash)
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<FarmerCredentialMail>>>,
    pub fail: bool,
}

impl MockMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl CredentialMailer for MockMailer {
    async fn send_farmer_credentials(
        &self,
        mail: &FarmerCredentialMail,
    ) -> Result<(), AccountsServiceError> {
        if self.fail {
            return Err(AccountsServiceError::Internal(anyhow::anyhow!(
                "mail transport down"
            )));
        }
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_agrovet_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        email: "owner@greenfarm.co.ke".into(),
        first_name: "Grace".into(),
        last_name: "Wanjiru".into(),
        password_hash: "hunter2hunter2".into(),
        kind: UserKind::Agrovet,
        must_reset_password: false,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_farmer_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        email: "jane@x.com".into(),
        first_name: "Jane".into(),
        last_name: "Njeri".into(),
        password_hash: "temp-password-12".into(),
        kind: UserKind::Farmer,
        must_reset_password: true,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_agrovet(user_id: Uuid) -> AgrovetProfile {
    AgrovetProfile {
        id: Uuid::now_v7(),
        user_id,
        business_name: "GreenFarm Supplies".into(),
        registration_number: "AGV-001".into(),
        location: "Nakuru".into(),
        created_at: Utc::now(),
    }
}

pub fn test_farmer(user_id: Uuid, registered_by: Uuid) -> FarmerProfile {
    FarmerProfile {
        id: Uuid::now_v7(),
        user_id,
        registered_by,
        farm_location: "Molo".into(),
        created_at: Utc::now(),
    }
}

pub fn test_farmer_input() -> RegisterFarmerInput {
    RegisterFarmerInput {
        first_name: "Jane".into(),
        last_name: "Njeri".into(),
        email: "jane@x.com".into(),
        farm_location: "Molo".into(),
    }
}
