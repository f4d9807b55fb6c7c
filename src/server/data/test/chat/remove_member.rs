use super::*;

/// Tests that removing a member keeps the messages it posted.
///
/// Expected: Ok(true), then Ok(false) on repeat, message count unchanged
#[tokio::test]
async fn removes_member_and_keeps_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let chat = factory::helpers::create_chat_with_members(db, &[&account]).await?;
    factory::create_message(db, chat.id, account.id, "Hello, World!").await?;

    let repo = ChatRepository::new(db);

    assert!(repo.remove_member(chat.id, account.id).await?);
    assert!(!repo.is_member(chat.id, account.id).await?);
    assert!(!repo.remove_member(chat.id, account.id).await?);

    let messages = Message::find()
        .filter(entity::message::Column::ChatId.eq(chat.id))
        .count(db)
        .await?;
    assert_eq!(messages, 1);

    Ok(())
}
