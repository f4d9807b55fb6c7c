use super::*;

/// Tests listing the servers an account belongs to.
///
/// Expected: only the joined servers, ordered by ID
#[tokio::test]
async fn returns_joined_servers_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let first = factory::create_server(db).await?;
    let _not_joined = factory::create_server(db).await?;
    let third = factory::create_server(db).await?;
    factory::add_server_member(db, third.id, account.id).await?;
    factory::add_server_member(db, first.id, account.id).await?;

    let repo = ServerRepository::new(db);
    let ids: Vec<i32> = repo
        .get_servers_for_account(account.id)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();

    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}
