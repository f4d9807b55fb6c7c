use super::*;

/// Tests that the owner is the first and only member of a new server.
///
/// Expected: Ok(Server) whose member list is exactly the owner
#[tokio::test]
async fn adds_owner_as_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_account(db).await?;

    let repo = ServerRepository::new(db);
    let server = repo.create_with_owner("General".to_string(), owner.id).await?;

    let members = repo.list_members(server.id).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, owner.id);

    Ok(())
}
