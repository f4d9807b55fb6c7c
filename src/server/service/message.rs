//! Message service for posting to and reading chat logs.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{chat::ChatRepository, message::MessageRepository},
    error::{validation::ValidationError, AppError},
    model::message::{CreateMessageParam, Message, MessageWithSender, PostMessageParam},
    util::time::to_utc_timestamp,
};

pub const MESSAGE_BODY_MAX_LEN: usize = 500;

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a message to a chat on behalf of one of its members.
    ///
    /// The body is limited to 500 characters (Unicode scalar values) and must not be blank. The
    /// timestamp defaults to now and is stored in UTC with microsecond precision.
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message
    /// - `Err(AppError::ValidationErr(MissingField | FieldTooLong))` - Invalid body
    /// - `Err(AppError::NotFound)` - No chat with that ID
    /// - `Err(AppError::ValidationErr(SenderNotMember))` - Sender is not a member of the chat
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn post_message(&self, param: PostMessageParam) -> Result<Message, AppError> {
        if param.body.trim().is_empty() {
            return Err(ValidationError::MissingField("body").into());
        }
        if param.body.chars().count() > MESSAGE_BODY_MAX_LEN {
            return Err(ValidationError::FieldTooLong {
                field: "body",
                max: MESSAGE_BODY_MAX_LEN,
            }
            .into());
        }

        let chat_repo = ChatRepository::new(self.db);
        if chat_repo.find_by_id(param.chat_id).await?.is_none() {
            return Err(AppError::NotFound("Chat not found".to_string()));
        }
        if !chat_repo.is_member(param.chat_id, param.sender_id).await? {
            return Err(ValidationError::SenderNotMember {
                chat_id: param.chat_id,
                account_id: param.sender_id,
            }
            .into());
        }

        let sent_at = to_utc_timestamp(param.sent_at.unwrap_or_else(Utc::now));

        let message_repo = MessageRepository::new(self.db);
        let message = message_repo
            .create(CreateMessageParam {
                chat_id: param.chat_id,
                sender_id: param.sender_id,
                sent_at,
                body: param.body,
            })
            .await?;

        Ok(message)
    }

    /// Gets a chat's log, oldest first, with each sender's current username.
    ///
    /// # Returns
    /// - `Ok(Vec<MessageWithSender>)` - Possibly empty
    /// - `Err(AppError::NotFound)` - No chat with that ID
    pub async fn list_messages(&self, chat_id: i32) -> Result<Vec<MessageWithSender>, AppError> {
        let chat_repo = ChatRepository::new(self.db);
        if chat_repo.find_by_id(chat_id).await?.is_none() {
            return Err(AppError::NotFound("Chat not found".to_string()));
        }

        let message_repo = MessageRepository::new(self.db);
        let messages = message_repo.get_by_chat_id(chat_id).await?;
        Ok(messages)
    }
}
