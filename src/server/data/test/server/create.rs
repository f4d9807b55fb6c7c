use super::*;

/// Tests creating a server.
///
/// Expected: Ok(Server) with fresh ID and no members
#[tokio::test]
async fn creates_server_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let first = repo.create("General".to_string()).await?;
    let second = repo.create("General".to_string()).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.server_name, "General");
    assert!(repo.list_members(first.id).await?.is_empty());

    let found = repo.find_by_id(first.id).await?;
    assert_eq!(found, Some(first));

    Ok(())
}
