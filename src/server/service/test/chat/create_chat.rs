use super::*;

/// Tests that the creator is always a member.
///
/// Expected: members are the creator plus the requested account, each once
#[tokio::test]
async fn includes_creator_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_account(db).await?;
    let friend = factory::create_account(db).await?;

    let service = ChatService::new(db);
    let chat = service
        .create_chat(CreateChatParam {
            creator_id: creator.id,
            member_ids: vec![friend.id, creator.id, friend.id],
        })
        .await?;

    let ids: HashSet<i32> = service
        .list_members(chat.id)
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, HashSet::from([creator.id, friend.id]));

    Ok(())
}

/// Tests creating a chat naming an account that does not exist.
///
/// Expected: Err(AppError::NotFound) and no chat persisted
#[tokio::test]
async fn fails_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_account(db).await?;

    let service = ChatService::new(db);
    let result = service
        .create_chat(CreateChatParam {
            creator_id: creator.id,
            member_ids: vec![999],
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(Chat::find().count(db).await?, 0);

    Ok(())
}
