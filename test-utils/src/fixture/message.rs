//! Fixture for message test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::message;

pub const DEFAULT_MESSAGE_ID: i32 = 1;
pub const DEFAULT_CHAT_ID: i32 = 1;
pub const DEFAULT_SENDER_ID: i32 = 1;
pub const DEFAULT_BODY: &str = "Hello, World!";

/// Creates a message entity model with default values.
pub fn entity() -> message::Model {
    entity_builder().build()
}

/// Creates a customizable message entity builder.
pub fn entity_builder() -> MessageEntityBuilder {
    MessageEntityBuilder::default()
}

/// Builder for message entity models.
pub struct MessageEntityBuilder {
    id: i32,
    chat_id: i32,
    sender_id: Option<i32>,
    sent_at: DateTime<Utc>,
    body: String,
}

impl Default for MessageEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_MESSAGE_ID,
            chat_id: DEFAULT_CHAT_ID,
            sender_id: Some(DEFAULT_SENDER_ID),
            sent_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            body: DEFAULT_BODY.to_string(),
        }
    }
}

impl MessageEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn sender_id(mut self, sender_id: Option<i32>) -> Self {
        self.sender_id = sender_id;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> message::Model {
        message::Model {
            id: self.id,
            chat_id: self.chat_id,
            sender_id: self.sender_id,
            sent_at: self.sent_at,
            body: self.body,
        }
    }
}
