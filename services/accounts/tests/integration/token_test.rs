use shamba_accounts::error::AccountsServiceError;
use shamba_accounts::usecase::token::{
    LoginInput, LoginUseCase, RefreshTokenUseCase, issue_access_token, issue_refresh_token,
};
use shamba_auth_types::token::{validate_access_token, validate_token};
use shamba_domain::user::UserKind;

use crate::helpers::{MockUserRepo, PlainHashPort, TEST_JWT_SECRET, test_agrovet_user};

// ── issue_access_token / issue_refresh_token ─────────────────────────────────

#[tokio::test]
async fn should_issue_access_token_that_validates_successfully() {
    let user = test_agrovet_user();
    let (token, exp) = issue_access_token(&user, TEST_JWT_SECRET).unwrap();

    assert!(!token.is_empty());
    assert!(exp > 0);

    let info = validate_access_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.kind, UserKind::Agrovet);
    assert_eq!(info.access_token_exp, exp);
}

#[tokio::test]
async fn should_reject_token_signed_with_wrong_secret() {
    let user = test_agrovet_user();
    let (token, _) = issue_access_token(&user, TEST_JWT_SECRET).unwrap();

    assert!(validate_token(&token, "wrong-secret").is_err());
}

#[tokio::test]
async fn should_issue_refresh_token_that_validates_successfully() {
    let user = test_agrovet_user();
    let token = issue_refresh_token(&user, TEST_JWT_SECRET).unwrap();

    assert!(!token.is_empty());

    let claims = validate_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.kind, UserKind::Agrovet);
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_valid_credentials() {
    let user = test_agrovet_user();
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        hasher: PlainHashPort,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = usecase
        .execute(LoginInput {
            email: user.email.clone(),
            password: user.password_hash.clone(),
        })
        .await
        .unwrap();

    assert_eq!(out.user.id, user.id);
    assert!(out.access_token_exp > 0);

    // Both tokens are valid JWTs carrying the caller's identity.
    let access = validate_access_token(&out.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(access.user_id, user.id);
    let refresh = validate_token(&out.refresh_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(refresh.sub, user.id.to_string());
}

#[tokio::test]
async fn should_reject_unknown_email() {
    let usecase = LoginUseCase {
        users: MockUserRepo::empty(),
        hasher: PlainHashPort,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase
        .execute(LoginInput {
            email: "nobody@example.com".into(),
            password: "whatever-pass".into(),
        })
        .await;
    assert!(matches!(
        result,
        Err(AccountsServiceError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let user = test_agrovet_user();
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        hasher: PlainHashPort,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase
        .execute(LoginInput {
            email: user.email.clone(),
            password: "not-the-password".into(),
        })
        .await;
    assert!(matches!(
        result,
        Err(AccountsServiceError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn should_reject_disabled_account_with_correct_password() {
    let mut user = test_agrovet_user();
    user.is_active = false;
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        hasher: PlainHashPort,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase
        .execute(LoginInput {
            email: user.email.clone(),
            password: user.password_hash.clone(),
        })
        .await;
    assert!(matches!(result, Err(AccountsServiceError::AccountDisabled)));
}

// ── RefreshTokenUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_new_access_token_from_refresh_token() {
    let user = test_agrovet_user();
    let refresh = issue_refresh_token(&user, TEST_JWT_SECRET).unwrap();

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let out = usecase.execute(&refresh).await.unwrap();

    let info = validate_access_token(&out.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert_eq!(info.access_token_exp, out.access_token_exp);
}

#[tokio::test]
async fn should_reject_garbage_refresh_token() {
    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase.execute("not-a-jwt").await;
    assert!(matches!(
        result,
        Err(AccountsServiceError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn should_reject_refresh_for_deleted_user() {
    let user = test_agrovet_user();
    let refresh = issue_refresh_token(&user, TEST_JWT_SECRET).unwrap();

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase.execute(&refresh).await;
    assert!(matches!(
        result,
        Err(AccountsServiceError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn should_reject_refresh_for_deactivated_user() {
    let mut user = test_agrovet_user();
    let refresh = issue_refresh_token(&user, TEST_JWT_SECRET).unwrap();
    user.is_active = false;

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase.execute(&refresh).await;
    assert!(matches!(
        result,
        Err(AccountsServiceError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn should_reject_refresh_signed_with_other_secret() {
    let user = test_agrovet_user();
    let refresh = issue_refresh_token(&user, "some-other-secret").unwrap();

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let result = usecase.execute(&refresh).await;
    assert!(matches!(
        result,
        Err(AccountsServiceError::InvalidRefreshToken)
    ));
}
