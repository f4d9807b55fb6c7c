use super::*;

/// Tests deleting an account that belongs to a server and a chat.
///
/// Expected: Ok(()), account gone, memberships gone, message kept
#[tokio::test]
async fn deletes_account_and_keeps_messages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_server, account) = factory::helpers::create_server_with_member(db).await?;
    let chat = factory::helpers::create_chat_with_members(db, &[&account]).await?;
    let message = factory::create_message(db, chat.id, account.id, "Hello, World!").await?;

    let service = AccountService::new(db);
    service.delete_account(account.id).await?;

    assert!(matches!(
        service.get_account(account.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(ServerMember::find().all(db).await?.is_empty());
    assert!(ChatMember::find().all(db).await?.is_empty());

    let kept = Message::find_by_id(message.id).one(db).await?.unwrap();
    assert_eq!(kept.sender_id, None);

    Ok(())
}

/// Tests deleting an account that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    let result = service.delete_account(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
