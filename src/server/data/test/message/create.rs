use super::*;

/// Tests appending a message.
///
/// Expected: Ok(Message) with the given fields and a fresh ID
#[tokio::test]
async fn creates_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let chat = factory::helpers::create_chat_with_members(db, &[&account]).await?;
    let sent_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParam {
            chat_id: chat.id,
            sender_id: account.id,
            sent_at,
            body: "Hello, World!".to_string(),
        })
        .await?;

    assert!(message.id > 0);
    assert_eq!(message.chat_id, chat.id);
    assert_eq!(message.sender_id, Some(account.id));
    assert_eq!(message.sent_at, sent_at);
    assert_eq!(message.body, "Hello, World!");

    Ok(())
}
