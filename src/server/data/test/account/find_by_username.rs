use super::*;

/// Tests finding an existing account by username.
///
/// Expected: Ok(Some(Account))
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::account::create_account_with_username(db, "user1").await?;

    let repo = AccountRepository::new(db);
    let found = repo.find_by_username("user1").await?;

    assert_eq!(found.map(|a| a.id), Some(created.id));

    Ok(())
}

/// Tests that an unknown username yields nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::create_account_with_username(db, "user1").await?;

    let repo = AccountRepository::new(db);

    assert!(repo.find_by_username("user2").await?.is_none());
    assert!(repo.find_credentials_by_username("user2").await?.is_none());

    Ok(())
}

/// Tests that credentials carry the stored hash.
///
/// Expected: Ok(Some(AccountCredentials)) whose hash matches the row
#[tokio::test]
async fn loads_credentials_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Account).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::account::create_account_with_username(db, "user1").await?;

    let repo = AccountRepository::new(db);
    let credentials = repo.find_credentials_by_username("user1").await?.unwrap();

    assert_eq!(credentials.account.id, created.id);
    assert_eq!(credentials.password_hash, created.password_hash);

    Ok(())
}
