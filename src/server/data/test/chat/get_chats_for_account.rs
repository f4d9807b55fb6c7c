use super::*;

/// Tests listing the chats an account belongs to.
///
/// Expected: only the joined chats, ordered by ID
#[tokio::test]
async fn returns_joined_chats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let other = factory::create_account(db).await?;
    let first = factory::helpers::create_chat_with_members(db, &[&account, &other]).await?;
    factory::helpers::create_chat_with_members(db, &[&other]).await?;
    let third = factory::helpers::create_chat_with_members(db, &[&account]).await?;

    let repo = ChatRepository::new(db);
    let ids: Vec<i32> = repo
        .get_chats_for_account(account.id)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}
