use super::*;

/// Tests deleting a server.
///
/// Expected: Ok(true), server and its membership rows gone, accounts kept
#[tokio::test]
async fn deletes_server_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, account) = factory::helpers::create_server_with_member(db).await?;

    let repo = ServerRepository::new(db);

    assert!(repo.delete(server.id).await?);
    assert!(repo.find_by_id(server.id).await?.is_none());

    let rows = ServerMember::find()
        .filter(entity::server_member::Column::ServerId.eq(server.id))
        .count(db)
        .await?;
    assert_eq!(rows, 0);
    assert!(Account::find_by_id(account.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a server that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}
