use super::*;

/// Tests listing an account's servers and chats.
///
/// Expected: the one server and the one chat it joined
#[tokio::test]
async fn lists_servers_and_chats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, account) = factory::helpers::create_server_with_member(db).await?;
    let chat = factory::helpers::create_chat_with_members(db, &[&account]).await?;
    factory::create_server(db).await?;
    factory::create_chat(db).await?;

    let service = AccountService::new(db);

    let servers = service.list_servers(account.id).await?;
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, server.id);

    let chats = service.list_chats(account.id).await?;
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].id, chat.id);

    Ok(())
}

/// Tests listing memberships of an unknown account.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);

    assert!(matches!(
        service.list_servers(999).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.list_chats(999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
