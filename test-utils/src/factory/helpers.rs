//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server with one freshly created member.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((server, account))` - The server and its member
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_member(
    db: &DatabaseConnection,
) -> Result<(entity::server::Model, entity::account::Model), DbErr> {
    let account = crate::factory::account::create_account(db).await?;
    let server = crate::factory::server::create_server(db).await?;
    crate::factory::server::add_server_member(db, server.id, account.id).await?;

    Ok((server, account))
}

/// Creates a chat whose members are the given accounts.
///
/// # Arguments
/// - `db` - Database connection
/// - `members` - Accounts to add to the chat
///
/// # Returns
/// - `Ok(entity::chat::Model)` - The created chat
/// - `Err(DbErr)` - Database error during creation
pub async fn create_chat_with_members(
    db: &DatabaseConnection,
    members: &[&entity::account::Model],
) -> Result<entity::chat::Model, DbErr> {
    let chat = crate::factory::chat::create_chat(db).await?;
    for member in members {
        crate::factory::chat::add_chat_member(db, chat.id, member.id).await?;
    }

    Ok(chat)
}
