use super::*;
use std::collections::HashSet;

/// Tests projecting chat members to usernames.
///
/// Expected: exactly {user1, user2}
#[tokio::test]
async fn returns_usernames_of_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::account::create_account_with_username(db, "user1").await?;
    let user2 = factory::account::create_account_with_username(db, "user2").await?;
    factory::account::create_account_with_username(db, "user3").await?;
    let chat = factory::helpers::create_chat_with_members(db, &[&user1, &user2]).await?;

    let repo = ChatRepository::new(db);
    let usernames: HashSet<String> = repo
        .list_member_usernames(chat.id)
        .await?
        .into_iter()
        .collect();

    let expected: HashSet<String> = ["user1", "user2"].iter().map(|s| s.to_string()).collect();
    assert_eq!(usernames, expected);

    Ok(())
}

/// Tests a chat with no members.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_chat_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = factory::create_chat(db).await?;

    let repo = ChatRepository::new(db);

    assert!(repo.list_member_usernames(chat.id).await?.is_empty());

    Ok(())
}
