use anyhow::Context as _;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
        rand_core::OsRng},
};
use tokio::task;

use crate::domain::repository::PasswordHashPort;
use crate::error::AccountsServiceError;

/// Argon2id implementation of the password-hash port.
///
/// Hashing and verification run under `spawn_blocking` — argon2 is
/// CPU-intensive and would stall the async runtime if run inline.
#[derive(Clone, Default)]
pub struct Argon2HashPort;

impl PasswordHashPort for Argon2HashPort {
    async fn hash(&self, password: &str) -> Result<String, AccountsServiceError> {
        let password = password.to_owned();
        let hash = task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| anyhow::anyhow!("hash password: {e}"))
        })
        .await
        .context("password hashing task panicked")??;
        Ok(hash)
    }

    async fn verify(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, AccountsServiceError> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        let is_valid = task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash)
                .map_err(|e| anyhow::anyhow!("invalid password hash format: {e}"))?;
            Ok::<bool, anyhow::Error>(
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok(),
            )
        })
        .await
        .context("password verification task panicked")??;
        Ok(is_valid)
    }
}
