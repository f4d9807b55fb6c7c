use super::*;

/// Tests authenticating with the correct password.
///
/// Expected: Ok(true) and last_login recorded
#[tokio::test]
async fn accepts_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let account = service
        .register(register_param("user1", "user1@example.com"))
        .await?;
    assert!(account.last_login.is_none());

    assert!(service.authenticate("user1", "user1pass").await?);

    let account = service.get_account(account.id).await?;
    assert!(account.last_login.is_some());

    Ok(())
}

/// Tests authenticating with a wrong password.
///
/// Expected: Ok(false) and no login recorded
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let account = service
        .register(register_param("user1", "user1@example.com"))
        .await?;

    assert!(!service.authenticate("user1", "wrongpass").await?);

    let account = service.get_account(account.id).await?;
    assert!(account.last_login.is_none());

    Ok(())
}

/// Tests authenticating an unknown username.
///
/// Indistinguishable from a wrong password.
///
/// Expected: Ok(false)
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::create_account_with_username(db, "user1").await?;

    let service = AccountService::new(db);

    assert!(!service.authenticate("nobody", "password123").await?);
    assert!(service.verify_credentials("nobody", "password123").await?.is_none());

    Ok(())
}

/// Tests that factory accounts authenticate with the default password.
///
/// Expected: Ok(Some(Account))
#[tokio::test]
async fn verifies_factory_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_account(db).await?;

    let service = AccountService::new(db);
    let account = service
        .verify_credentials(
            &created.username,
            test_utils::factory::account::DEFAULT_PASSWORD,
        )
        .await?;

    assert_eq!(account.map(|a| a.id), Some(created.id));

    Ok(())
}

/// Tests that a password sharing the first 72 bytes of the stored one is rejected.
///
/// Expected: Ok(false) and no login recorded
#[tokio::test]
async fn rejects_longer_password_with_same_prefix() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = "a".repeat(72);
    let service = AccountService::new(db);
    let account = service
        .register(RegisterAccountParam {
            password: stored.clone(),
            ..register_param("user1", "user1@example.com")
        })
        .await?;

    assert!(!service.authenticate("user1", &format!("{}Y", stored)).await?);
    assert!(service.authenticate("user1", &stored).await?);

    let account = service.get_account(account.id).await?;
    assert!(account.last_login.is_some());

    Ok(())
}

/// Tests registering a password bcrypt would truncate.
///
/// Expected: Err(ValidationError::FieldTooLong)
#[tokio::test]
async fn register_rejects_password_over_72_bytes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let result = service
        .register(RegisterAccountParam {
            password: format!("{}X", "a".repeat(72)),
            ..register_param("user1", "user1@example.com")
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::FieldTooLong {
            field: "password",
            max: 72
        }))
    ));

    Ok(())
}

/// Tests logging in with the same surrounding whitespace used at registration.
///
/// Expected: Ok(true), the stored username is trimmed
#[tokio::test]
async fn trims_username_like_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let account = service
        .register(RegisterAccountParam {
            password: "alicepass".to_string(),
            ..register_param("  alice ", "alice@example.com")
        })
        .await?;
    assert_eq!(account.username, "alice");

    assert!(service.authenticate("  alice ", "alicepass").await?);
    assert!(service.authenticate("alice", "alicepass").await?);

    Ok(())
}
