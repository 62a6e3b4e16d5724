//! Bearer-token identity extractor.

use axum::extract::{FromRef, FromRequestParts};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use shamba_domain::user::UserKind;

use crate::token::validate_access_token;

/// HMAC secret for validating bearer tokens, provided by the service state
/// via `FromRef`.
#[derive(Debug, Clone)]
pub struct JwtSecret(pub String);

/// Caller identity established from the `Authorization: Bearer <jwt>` header.
///
/// Returns 401 if the header is absent, is not a bearer credential, or the
/// token fails validation. Role enforcement (403) is done by handlers after
/// extraction; liveness of the account is re-checked by usecases that load
/// the caller.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub kind: UserKind,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let token = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::to_owned);

        async move {
            let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
            let info = validate_access_token(&token, &secret.0)
                .map_err(|_| StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                user_id: info.user_id,
                kind: info.kind,
            })
        }
    }
}
