use super::*;

/// Tests a fresh registration.
///
/// Verifies the account is stored and the stored hash is not the plaintext password.
///
/// Expected: Ok(Account)
#[tokio::test]
async fn registers_account_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let account = service
        .register(register_param("user1", "user1@example.com"))
        .await?;

    assert_eq!(account.username, "user1");
    assert_eq!(account.email, "user1@example.com");

    let stored = Account::find_by_id(account.id).one(db).await?.unwrap();
    assert_ne!(stored.password_hash, "user1pass");
    assert!(bcrypt::verify("user1pass", &stored.password_hash)?);

    Ok(())
}

/// Tests registering a username that is already taken.
///
/// Expected: Err(ValidationError::DuplicateUsername)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    service
        .register(register_param("user1", "user1@example.com"))
        .await?;

    let result = service
        .register(register_param("user1", "other@example.com"))
        .await;

    match result {
        Err(AppError::ValidationErr(ValidationError::DuplicateUsername(username))) => {
            assert_eq!(username, "user1")
        }
        other => panic!("Expected DuplicateUsername, got: {:?}", other),
    }

    Ok(())
}

/// Tests registering an email that is already registered.
///
/// The domain is normalised before the check, so a different case still clashes.
///
/// Expected: Err(ValidationError::DuplicateEmail)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    service
        .register(register_param("user1", "user1@example.com"))
        .await?;

    let result = service
        .register(register_param("user2", "user1@EXAMPLE.com"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::DuplicateEmail(_)))
    ));

    Ok(())
}

/// Tests that empty username or email is rejected before touching the database.
///
/// Expected: Err(ValidationError::MissingField)
#[tokio::test]
async fn rejects_empty_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);

    let result = service.register(register_param("", "user1@example.com")).await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::MissingField(
            "username"
        )))
    ));

    let result = service.register(register_param("user1", "")).await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::MissingField("email")))
    ));

    assert!(Account::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that an invalid phone number is rejected.
///
/// Expected: Err(ValidationError::InvalidPhoneNumber)
#[tokio::test]
async fn rejects_invalid_phone_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let mut param = register_param("user1", "user1@example.com");
    param.phone_number = "555-0100".to_string();

    let result = service.register(param).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidPhoneNumber))
    ));

    Ok(())
}
