use uuid::Uuid;

use shamba_accounts::error::AccountsServiceError;
use shamba_accounts::usecase::password::{ResetPasswordInput, ResetPasswordUseCase};

use crate::helpers::{MockUserRepo, PlainHashPort, test_agrovet_user, test_farmer_user};

fn reset_input(password: &str) -> ResetPasswordInput {
    ResetPasswordInput {
        new_password: password.to_owned(),
        new_password2: password.to_owned(),
    }
}

#[tokio::test]
async fn should_replace_hash_and_clear_flag() {
    let user = test_farmer_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let handle = users.users_handle();
    let usecase = ResetPasswordUseCase {
        users,
        hasher: PlainHashPort,
    };

    usecase
        .execute(user.id, reset_input("fresh-password"))
        .await
        .unwrap();

    let users = handle.lock().unwrap();
    let stored = users.iter().find(|u| u.id == user.id).unwrap();
    assert_eq!(stored.password_hash, "fresh-password");
    assert!(!stored.must_reset_password);
}

#[tokio::test]
async fn should_reject_when_reset_not_required() {
    // Self-registered agrovets never carry the flag.
    let user = test_agrovet_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let handle = users.users_handle();
    let usecase = ResetPasswordUseCase {
        users,
        hasher: PlainHashPort,
    };

    let result = usecase.execute(user.id, reset_input("fresh-password")).await;
    assert!(matches!(result, Err(AccountsServiceError::ResetNotRequired)));

    let users = handle.lock().unwrap();
    let stored = users.iter().find(|u| u.id == user.id).unwrap();
    assert_eq!(stored.password_hash, user.password_hash);
}

#[tokio::test]
async fn should_reject_mismatched_confirmation_and_keep_flag() {
    let user = test_farmer_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let handle = users.users_handle();
    let usecase = ResetPasswordUseCase {
        users,
        hasher: PlainHashPort,
    };

    let result = usecase
        .execute(
            user.id,
            ResetPasswordInput {
                new_password: "fresh-password".into(),
                new_password2: "other-password".into(),
            },
        )
        .await;
    assert!(matches!(result, Err(AccountsServiceError::PasswordMismatch)));

    let users = handle.lock().unwrap();
    let stored = users.iter().find(|u| u.id == user.id).unwrap();
    assert!(stored.must_reset_password, "flag must survive a failed reset");
    assert_eq!(stored.password_hash, user.password_hash);
}

#[tokio::test]
async fn should_reject_short_password_and_keep_flag() {
    let user = test_farmer_user();
    let users = MockUserRepo::new(vec![user.clone()]);
    let handle = users.users_handle();
    let usecase = ResetPasswordUseCase {
        users,
        hasher: PlainHashPort,
    };

    let result = usecase.execute(user.id, reset_input("seven77")).await;
    assert!(matches!(result, Err(AccountsServiceError::PasswordTooShort)));

    let users = handle.lock().unwrap();
    let stored = users.iter().find(|u| u.id == user.id).unwrap();
    assert!(stored.must_reset_password);
}

#[tokio::test]
async fn should_treat_unknown_user_as_invalid_token() {
    let usecase = ResetPasswordUseCase {
        users: MockUserRepo::empty(),
        hasher: PlainHashPort,
    };
    let result = usecase
        .execute(Uuid::now_v7(), reset_input("fresh-password"))
        .await;
    assert!(matches!(result, Err(AccountsServiceError::InvalidToken)));
}
