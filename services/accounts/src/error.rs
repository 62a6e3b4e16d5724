use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Accounts service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccountsServiceError {
    #[error("missing required field")]
    MissingField(&'static str),
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("passwords don't match")]
    PasswordMismatch,
    #[error("password must be at least 8 characters")]
    PasswordTooShort,
    #[error("email already registered")]
    EmailTaken,
    #[error("registration number already registered")]
    RegistrationNumberTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("account disabled")]
    AccountDisabled,
    #[error("invalid token")]
    InvalidToken,
    #[error("invalid refresh token")]
    InvalidRefreshToken,
    #[error("access denied")]
    Forbidden,
    #[error("password reset required")]
    ResetRequired,
    #[error("password reset not required")]
    ResetNotRequired,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::RegistrationNumberTaken => "REGISTRATION_NUMBER_TAKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AccountDisabled => "ACCOUNT_DISABLED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::Forbidden => "FORBIDDEN",
            Self::ResetRequired => "RESET_REQUIRED",
            Self::ResetNotRequired => "RESET_NOT_REQUIRED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Offending input field for validation-sourced errors, `None` otherwise.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(field) => Some(*field),
            Self::InvalidEmail | Self::EmailTaken => Some("email"),
            Self::PasswordMismatch | Self::PasswordTooShort => Some("password"),
            Self::RegistrationNumberTaken => Some("registration_number"),
            _ => None,
        }
    }
}

impl IntoResponse for AccountsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingField(_)
            | Self::InvalidEmail
            | Self::PasswordMismatch
            | Self::PasswordTooShort
            | Self::EmailTaken
            | Self::RegistrationNumberTaken
            | Self::InvalidCredentials
            | Self::AccountDisabled
            | Self::ResetRequired
            | Self::ResetNotRequired => StatusCode::BAD_REQUEST,
            Self::InvalidToken | Self::InvalidRefreshToken => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Some(field) = self.field() {
            body["field"] = serde_json::Value::String(field.to_owned());
        }
        (status, axum::Json(body)).into_response()
    }
}
