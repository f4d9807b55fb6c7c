use super::*;

/// Tests counting a chat's messages.
///
/// Expected: 2 for the chat with two messages, 0 for an empty chat
#[tokio::test]
async fn counts_messages_per_chat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let chat = factory::helpers::create_chat_with_members(db, &[&account]).await?;
    let empty = factory::create_chat(db).await?;
    factory::create_message(db, chat.id, account.id, "one").await?;
    factory::create_message(db, chat.id, account.id, "two").await?;

    let repo = MessageRepository::new(db);

    assert_eq!(repo.count_by_chat_id(chat.id).await?, 2);
    assert_eq!(repo.count_by_chat_id(empty.id).await?, 0);

    Ok(())
}
