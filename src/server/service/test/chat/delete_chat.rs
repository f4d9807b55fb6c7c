use super::*;

/// Tests that deleting a chat with N messages leaves none behind.
///
/// Expected: Ok(()), zero messages for the chat ID, then NotFound on lookup
#[tokio::test]
async fn deletes_chat_and_its_messages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let chat = factory::helpers::create_chat_with_members(db, &[&account]).await?;
    for i in 0..5 {
        factory::create_message(db, chat.id, account.id, format!("Message {}", i)).await?;
    }

    let service = ChatService::new(db);
    service.delete_chat(chat.id).await?;

    let remaining = Message::find()
        .filter(entity::message::Column::ChatId.eq(chat.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);
    assert!(matches!(
        service.get_chat(chat.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a chat that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_chat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ChatService::new(db);

    assert!(matches!(
        service.delete_chat(999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
