//! Chat factory for creating test chats and chat memberships.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an empty chat.
pub async fn create_chat(db: &DatabaseConnection) -> Result<entity::chat::Model, DbErr> {
    entity::chat::ActiveModel {
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds an account to a chat's membership set.
///
/// # Arguments
/// - `db` - Database connection
/// - `chat_id` - ID of an existing chat
/// - `account_id` - ID of an existing account
pub async fn add_chat_member(
    db: &DatabaseConnection,
    chat_id: i32,
    account_id: i32,
) -> Result<entity::chat_member::Model, DbErr> {
    entity::chat_member::ActiveModel {
        chat_id: ActiveValue::Set(chat_id),
        account_id: ActiveValue::Set(account_id),
    }
    .insert(db)
    .await
}
