//! Message factory for creating test message log entries.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages.
///
/// Inserts directly, without the membership check the message service performs, so tests
/// can set up arbitrary histories.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    chat_id: i32,
    sender_id: Option<i32>,
    sent_at: DateTime<Utc>,
    body: String,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory for the given chat and sender, sent now.
    pub fn new(db: &'a DatabaseConnection, chat_id: i32, sender_id: i32) -> Self {
        Self {
            db,
            chat_id,
            sender_id: Some(sender_id),
            sent_at: Utc::now(),
            body: "Hello, World!".to_string(),
        }
    }

    pub fn sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = sent_at;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds and inserts the message entity into the database.
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            chat_id: ActiveValue::Set(self.chat_id),
            sender_id: ActiveValue::Set(self.sender_id),
            sent_at: ActiveValue::Set(self.sent_at),
            body: ActiveValue::Set(self.body),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with the given body, sent now.
pub async fn create_message(
    db: &DatabaseConnection,
    chat_id: i32,
    sender_id: i32,
    body: impl Into<String>,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, chat_id, sender_id)
        .body(body)
        .build()
        .await
}
