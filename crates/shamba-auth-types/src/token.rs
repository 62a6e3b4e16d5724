//! JWT access-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "USE_ONLY_IN_ACCOUNTS_SERVICE", test))]
use serde::Serialize;
use uuid::Uuid;

use shamba_domain::user::UserKind;

/// Access-token JWT lifetime in seconds (4 hours).
pub const ACCESS_TOKEN_EXP: u64 = 14400;

/// Refresh-token JWT lifetime in seconds (7 days).
pub const REFRESH_TOKEN_EXP: u64 = 604800;

/// User identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub kind: UserKind,
    pub access_token_exp: u64,
}

/// Errors returned by [`validate_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload shared by token creation and validation.
///
/// | Field | JWT claim | Rust type | Meaning |
/// |-------|-----------|-----------|---------|
/// | `sub` | `sub` | UUID string | user ID |
/// | `kind` | custom | [`UserKind`] | account kind |
/// | `exp` | `exp` | seconds since epoch | token expiration |
///
/// [`Deserialize`] is always available — all consumers validate tokens.
/// [`Serialize`] requires the **`USE_ONLY_IN_ACCOUNTS_SERVICE`** cargo
/// feature. Only the accounts service enables it because it is the sole
/// token issuer.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_ACCOUNTS_SERVICE", test), derive(Serialize))]
pub struct JwtClaims {
    /// User ID (UUID string).
    pub sub: String,
    /// Account kind.
    pub kind: UserKind,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

// ── Core decode (private) ────────────────────────────────────────────────

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s — tolerates clock skew between issuer and clients.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

// ── Public: all consumers ────────────────────────────────────────────────

/// Validate a bearer access token, returning parsed identity.
///
/// This is the primary public API for token validation. The `Identity`
/// extractor calls this on every authenticated request.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let claims = decode_jwt(token, secret)?;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        kind: claims.kind,
        access_token_exp: claims.exp,
    })
}

// ── Feature-gated: accounts service only ─────────────────────────────────

/// Validate a token and return raw JWT claims.
///
/// Used by the accounts service's refresh flow — validates the refresh
/// token, then looks up the user from the `sub` claim to issue a new
/// access token.
///
/// Requires the `USE_ONLY_IN_ACCOUNTS_SERVICE` feature. All other consumers
/// use [`validate_access_token`].
#[cfg(any(feature = "USE_ONLY_IN_ACCOUNTS_SERVICE", test))]
pub fn validate_token(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    decode_jwt(token, secret)
}
