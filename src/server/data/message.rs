//! Message log repository.
//!
//! Messages are append-only; there is no update or single-message delete. A chat's log is
//! removed as a whole by `ChatRepository::delete`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::message::{CreateMessageParam, Message, MessageWithSender};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a message to a chat's log.
    ///
    /// Membership and length checks are the service's responsibility.
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message with its fresh ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMessageParam) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            chat_id: ActiveValue::Set(param.chat_id),
            sender_id: ActiveValue::Set(Some(param.sender_id)),
            sent_at: ActiveValue::Set(param.sent_at),
            body: ActiveValue::Set(param.body),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets a chat's messages with their senders, oldest first.
    ///
    /// Messages sharing a timestamp are ordered by ID, i.e. insertion order.
    pub async fn get_by_chat_id(&self, chat_id: i32) -> Result<Vec<MessageWithSender>, DbErr> {
        let rows = entity::prelude::Message::find()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .order_by_asc(entity::message::Column::SentAt)
            .order_by_asc(entity::message::Column::Id)
            .find_also_related(entity::prelude::Account)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(message, sender)| MessageWithSender::from_entity(message, sender))
            .collect())
    }

    /// Counts the messages in a chat's log.
    pub async fn count_by_chat_id(&self, chat_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::ChatId.eq(chat_id))
            .count(self.db)
            .await
    }
}
