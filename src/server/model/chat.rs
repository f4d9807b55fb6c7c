//! Chat domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::chat::{ChatDto, CreateChatDto};

/// A group of accounts owning an ordered message log.
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    pub fn into_dto(self) -> ChatDto {
        ChatDto {
            id: self.id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::chat::Model) -> Self {
        Self {
            id: entity.id,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a chat.
///
/// The creator is always added; `member_ids` may repeat it or each other.
#[derive(Debug, Clone)]
pub struct CreateChatParam {
    pub creator_id: i32,
    pub member_ids: Vec<i32>,
}

impl CreateChatParam {
    pub fn from_dto(creator_id: i32, dto: CreateChatDto) -> Self {
        Self {
            creator_id,
            member_ids: dto.member_ids,
        }
    }

    /// Creator followed by the requested members, without duplicates.
    pub fn all_member_ids(&self) -> Vec<i32> {
        let mut ids = vec![self.creator_id];
        for id in &self.member_ids {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }
}

/// Identifies one account's membership in one chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMembershipParam {
    pub chat_id: i32,
    pub account_id: i32,
}
