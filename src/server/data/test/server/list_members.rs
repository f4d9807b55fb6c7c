use super::*;

/// Tests listing members and their usernames.
///
/// Expected: exactly the added accounts, not members of other servers
#[tokio::test]
async fn lists_only_members_of_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::account::create_account_with_username(db, "user1").await?;
    let user2 = factory::account::create_account_with_username(db, "user2").await?;
    let outsider = factory::account::create_account_with_username(db, "user3").await?;

    let server = factory::create_server(db).await?;
    let other_server = factory::create_server(db).await?;
    factory::add_server_member(db, server.id, user1.id).await?;
    factory::add_server_member(db, server.id, user2.id).await?;
    factory::add_server_member(db, other_server.id, outsider.id).await?;

    let repo = ServerRepository::new(db);

    let ids: Vec<i32> = repo
        .list_members(server.id)
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec![user1.id, user2.id]);

    let usernames = repo.list_member_usernames(server.id).await?;
    assert_eq!(usernames, vec!["user1".to_string(), "user2".to_string()]);

    Ok(())
}

/// Tests listing members of an unknown server.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_unknown_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);

    assert!(repo.list_members(999).await?.is_empty());

    Ok(())
}
