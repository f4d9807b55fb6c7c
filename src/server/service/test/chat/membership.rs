use super::*;

/// Tests the add, remove, remove-again sequence on a chat.
///
/// Expected: present after add, absent after remove, second remove is a no-op
#[tokio::test]
async fn add_then_remove_twice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let chat = factory::create_chat(db).await?;
    let param = ChatMembershipParam {
        chat_id: chat.id,
        account_id: account.id,
    };

    let service = ChatService::new(db);

    assert!(service.add_member(param).await?);
    assert!(!service.add_member(param).await?);
    assert!(service.is_member(param).await?);

    assert!(service.remove_member(param).await?);
    assert!(!service.is_member(param).await?);
    assert!(!service.remove_member(param).await?);

    Ok(())
}

/// Tests adding an unknown account to a chat.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = factory::create_chat(db).await?;

    let service = ChatService::new(db);
    let result = service
        .add_member(ChatMembershipParam {
            chat_id: chat.id,
            account_id: 999,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
