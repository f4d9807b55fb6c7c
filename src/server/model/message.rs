//! Message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::message::{MessageDto, PostMessageDto};

/// An immutable, timestamped entry in a chat's log.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub chat_id: i32,
    /// `None` once the sending account has been deleted.
    pub sender_id: Option<i32>,
    pub sent_at: DateTime<Utc>,
    pub body: String,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            chat_id: entity.chat_id,
            sender_id: entity.sender_id,
            sent_at: entity.sent_at,
            body: entity.body,
        }
    }

    /// Converts to a DTO, attaching the sender's current username if known.
    pub fn into_dto(self, sender_username: Option<String>) -> MessageDto {
        MessageDto {
            id: self.id,
            chat_id: self.chat_id,
            sender_id: self.sender_id,
            sender_username,
            sent_at: self.sent_at,
            body: self.body,
        }
    }
}

/// A message joined with its sender's username as listed in a chat history.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageWithSender {
    pub message: Message,
    pub sender_username: Option<String>,
}

impl MessageWithSender {
    /// Converts a message entity and its optionally loaded sender.
    pub fn from_entity(
        entity: entity::message::Model,
        sender: Option<entity::account::Model>,
    ) -> Self {
        Self {
            message: Message::from_entity(entity),
            sender_username: sender.map(|account| account.username),
        }
    }

    pub fn into_dto(self) -> MessageDto {
        self.message.into_dto(self.sender_username)
    }
}

/// Input for posting a message to a chat.
#[derive(Debug, Clone)]
pub struct PostMessageParam {
    pub chat_id: i32,
    pub sender_id: i32,
    pub body: String,
    /// Defaults to the current time when `None`.
    pub sent_at: Option<DateTime<Utc>>,
}

impl PostMessageParam {
    pub fn from_dto(chat_id: i32, sender_id: i32, dto: PostMessageDto) -> Self {
        Self {
            chat_id,
            sender_id,
            body: dto.body,
            sent_at: None,
        }
    }
}

/// Validated message row ready for insertion.
#[derive(Debug, Clone)]
pub struct CreateMessageParam {
    pub chat_id: i32,
    pub sender_id: i32,
    pub sent_at: DateTime<Utc>,
    pub body: String,
}
