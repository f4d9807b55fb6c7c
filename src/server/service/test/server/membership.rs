use super::*;

/// Tests the add, remove, remove-again sequence.
///
/// Expected: member present after add, absent after remove, second remove is a no-op
#[tokio::test]
async fn add_then_remove_twice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let server = factory::create_server(db).await?;
    let param = ServerMembershipParam {
        server_id: server.id,
        account_id: account.id,
    };

    let service = ServerService::new(db);

    assert!(service.add_member(param).await?);
    let members = service.list_members(server.id).await?;
    assert!(members.iter().any(|m| m.id == account.id));

    assert!(service.remove_member(param).await?);
    let members = service.list_members(server.id).await?;
    assert!(!members.iter().any(|m| m.id == account.id));

    assert!(!service.remove_member(param).await?);
    assert!(service.list_members(server.id).await?.is_empty());

    Ok(())
}

/// Tests adding an account that is already a member.
///
/// Expected: Ok(false), member listed once
#[tokio::test]
async fn add_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, account) = factory::helpers::create_server_with_member(db).await?;

    let service = ServerService::new(db);
    let added = service
        .add_member(ServerMembershipParam {
            server_id: server.id,
            account_id: account.id,
        })
        .await?;

    assert!(!added);
    assert_eq!(service.list_members(server.id).await?.len(), 1);

    Ok(())
}

/// Tests membership changes naming unknown servers or accounts.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, account) = factory::helpers::create_server_with_member(db).await?;
    let service = ServerService::new(db);

    let result = service
        .add_member(ServerMembershipParam {
            server_id: server.id,
            account_id: 999,
        })
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service
        .add_member(ServerMembershipParam {
            server_id: 999,
            account_id: account.id,
        })
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service
        .remove_member(ServerMembershipParam {
            server_id: 999,
            account_id: account.id,
        })
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
