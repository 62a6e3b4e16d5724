use jsonwebtoken::{EncodingKey, Header, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use shamba_auth_types::token::{ACCESS_TOKEN_EXP, JwtClaims, REFRESH_TOKEN_EXP, validate_token};

use crate::domain::repository::{PasswordHashPort, UserRepository};
use crate::domain::types::User;
use crate::error::AccountsServiceError;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_access_token(
    user: &User,
    secret: &str,
) -> Result<(String, u64), AccountsServiceError> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = JwtClaims {
        sub: user.id.to_string(),
        kind: user.kind,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AccountsServiceError::Internal(e.into()))?;
    Ok((token, exp))
}

pub fn issue_refresh_token(user: &User, secret: &str) -> Result<String, AccountsServiceError> {
    let exp = now_secs() + REFRESH_TOKEN_EXP;
    let claims = JwtClaims {
        sub: user.id.to_string(),
        kind: user.kind,
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AccountsServiceError::Internal(e.into()))
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub access_token: String,
    pub access_token_exp: u64,
    pub refresh_token: String,
}

pub struct LoginUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHashPort,
{
    pub users: U,
    pub hasher: H,
    pub jwt_secret: String,
}

impl<U, H> LoginUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHashPort,
{
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, AccountsServiceError> {
        // Unknown email and wrong password are indistinguishable to the caller.
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(AccountsServiceError::InvalidCredentials)?;

        if !self
            .hasher
            .verify(&input.password, &user.password_hash)
            .await?
        {
            return Err(AccountsServiceError::InvalidCredentials);
        }
        if !user.is_active {
            return Err(AccountsServiceError::AccountDisabled);
        }

        let (access_token, access_token_exp) = issue_access_token(&user, &self.jwt_secret)?;
        let refresh_token = issue_refresh_token(&user, &self.jwt_secret)?;

        Ok(LoginOutput {
            user,
            access_token,
            access_token_exp,
            refresh_token,
        })
    }
}

// ── RefreshToken ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct RefreshTokenOutput {
    pub access_token: String,
    pub access_token_exp: u64,
}

pub struct RefreshTokenUseCase<U>
where
    U: UserRepository,
{
    pub users: U,
    pub jwt_secret: String,
}

impl<U> RefreshTokenUseCase<U>
where
    U: UserRepository,
{
    pub async fn execute(
        &self,
        refresh_token_value: &str,
    ) -> Result<RefreshTokenOutput, AccountsServiceError> {
        // Validate refresh token (sig + exp); an expired access token is
        // irrelevant here.
        let claims = validate_token(refresh_token_value, &self.jwt_secret)
            .map_err(|_| AccountsServiceError::InvalidRefreshToken)?;

        let user_id = claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| AccountsServiceError::InvalidRefreshToken)?;

        // Deleted or deactivated users cannot refresh.
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active)
            .ok_or(AccountsServiceError::InvalidRefreshToken)?;

        let (access_token, access_token_exp) = issue_access_token(&user, &self.jwt_secret)?;

        Ok(RefreshTokenOutput {
            access_token,
            access_token_exp,
        })
    }
}
