//! Credential policy: password lengths and the temporary-password alphabet.

/// Minimum length for any user-chosen password.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Length of system-issued temporary passwords.
pub const TEMP_PASSWORD_LEN: usize = 12;

/// Alphabet for temporary passwords: A-Z, a-z, 0-9 and `!@#$%^&*` (70 symbols).
/// Characters are drawn independently and uniformly; there is no guaranteed
/// per-class coverage.
pub const TEMP_PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Errors from checking a user-chosen password pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("passwords don't match")]
    Mismatch,
    #[error("password must be at least {PASSWORD_MIN_LEN} characters")]
    TooShort,
}

/// Check a password + confirmation pair against the policy.
pub fn check_password_pair(password: &str, confirmation: &str) -> Result<(), PasswordPolicyError> {
    if password != confirmation {
        return Err(PasswordPolicyError::Mismatch);
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(PasswordPolicyError::TooShort);
    }
    Ok(())
}
