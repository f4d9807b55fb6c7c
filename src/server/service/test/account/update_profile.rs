use super::*;

/// Tests changing a username.
///
/// Expected: Ok(Account) with the new username; lookup by old name fails
#[tokio::test]
async fn changes_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::account::create_account_with_username(db, "user1").await?;

    let service = AccountService::new(db);
    let updated = service
        .update_profile(
            created.id,
            UpdateAccountParam {
                username: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.username, "renamed");
    assert!(service.find_by_username("user1").await?.is_none());
    assert!(service.find_by_username("renamed").await?.is_some());

    Ok(())
}

/// Tests resubmitting the account's own username and email.
///
/// Expected: Ok(Account), no duplicate error against itself
#[tokio::test]
async fn allows_unchanged_values() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::account::create_account_with_username(db, "user1").await?;

    let service = AccountService::new(db);
    let updated = service
        .update_profile(
            created.id,
            UpdateAccountParam {
                username: Some(created.username.clone()),
                email: Some(created.email.clone()),
                phone_number: Some("0987654321".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.username, created.username);
    assert_eq!(updated.phone_number, "0987654321");

    Ok(())
}

/// Tests taking another account's username.
///
/// Expected: Err(ValidationError::DuplicateUsername)
#[tokio::test]
async fn rejects_username_of_other_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::create_account_with_username(db, "user1").await?;
    let second = factory::account::create_account_with_username(db, "user2").await?;

    let service = AccountService::new(db);
    let result = service
        .update_profile(
            second.id,
            UpdateAccountParam {
                username: Some("user1".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::DuplicateUsername(_)))
    ));

    Ok(())
}

/// Tests updating an account that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let result = service
        .update_profile(999, UpdateAccountParam::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
