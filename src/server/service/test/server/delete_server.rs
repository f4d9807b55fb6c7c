use super::*;

/// Tests deleting a server.
///
/// Expected: Ok(()), then NotFound on lookup and on a second delete
#[tokio::test]
async fn deletes_server() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, account) = factory::helpers::create_server_with_member(db).await?;

    let service = ServerService::new(db);
    service.delete_server(server.id).await?;

    assert!(matches!(
        service.get_server(server.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_server(server.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(
        !service
            .is_member(ServerMembershipParam {
                server_id: server.id,
                account_id: account.id,
            })
            .await?
    );

    Ok(())
}
