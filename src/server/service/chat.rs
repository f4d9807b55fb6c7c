//! Chat service for grouping business logic.
//!
//! Provides the `ChatService` for creating chats, managing their membership sets and answering
//! the member-usernames query used by the public chat members endpoint.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountRepository, chat::ChatRepository},
    error::AppError,
    model::{
        account::{Account, MemberUsernames},
        chat::{Chat, ChatMembershipParam, CreateChatParam},
    },
};

/// Service providing business logic for chats.
pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    /// Creates a new ChatService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ChatService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a chat containing its creator and the requested members.
    ///
    /// Every ID is checked before anything is written.
    ///
    /// # Returns
    /// - `Ok(Chat)` - The created chat
    /// - `Err(AppError::NotFound)` - One of the accounts does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_chat(&self, param: CreateChatParam) -> Result<Chat, AppError> {
        let account_repo = AccountRepository::new(self.db);

        let member_ids = param.all_member_ids();
        for account_id in &member_ids {
            if account_repo.find_by_id(*account_id).await?.is_none() {
                return Err(AppError::NotFound(format!(
                    "Account {} not found",
                    account_id
                )));
            }
        }

        let chat_repo = ChatRepository::new(self.db);
        let chat = chat_repo.create_with_members(&member_ids).await?;

        tracing::info!(
            chat_id = chat.id,
            members = member_ids.len(),
            "Created chat"
        );

        Ok(chat)
    }

    /// Retrieves a chat by ID.
    ///
    /// # Returns
    /// - `Ok(Chat)` - Chat found
    /// - `Err(AppError::NotFound)` - No chat with that ID
    pub async fn get_chat(&self, chat_id: i32) -> Result<Chat, AppError> {
        let chat_repo = ChatRepository::new(self.db);

        chat_repo
            .find_by_id(chat_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chat not found".to_string()))
    }

    /// Deletes a chat together with its message log.
    ///
    /// # Returns
    /// - `Ok(())` - Chat deleted
    /// - `Err(AppError::NotFound)` - No chat with that ID
    pub async fn delete_chat(&self, chat_id: i32) -> Result<(), AppError> {
        let chat_repo = ChatRepository::new(self.db);

        if !chat_repo.delete(chat_id).await? {
            return Err(AppError::NotFound("Chat not found".to_string()));
        }

        Ok(())
    }

    /// Adds an account to a chat. Adding an existing member changes nothing.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership created
    /// - `Ok(false)` - Already a member
    /// - `Err(AppError::NotFound)` - Chat or account does not exist
    pub async fn add_member(&self, param: ChatMembershipParam) -> Result<bool, AppError> {
        self.get_chat(param.chat_id).await?;

        let account_repo = AccountRepository::new(self.db);
        if account_repo.find_by_id(param.account_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Account {} not found",
                param.account_id
            )));
        }

        let chat_repo = ChatRepository::new(self.db);
        let added = chat_repo.add_member(param.chat_id, param.account_id).await?;
        Ok(added)
    }

    /// Removes an account from a chat. Removing a non-member changes nothing.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - Was not a member
    /// - `Err(AppError::NotFound)` - Chat does not exist
    pub async fn remove_member(&self, param: ChatMembershipParam) -> Result<bool, AppError> {
        self.get_chat(param.chat_id).await?;

        let chat_repo = ChatRepository::new(self.db);
        let removed = chat_repo
            .remove_member(param.chat_id, param.account_id)
            .await?;
        Ok(removed)
    }

    /// Lists the accounts belonging to a chat.
    pub async fn list_members(&self, chat_id: i32) -> Result<Vec<Account>, AppError> {
        self.get_chat(chat_id).await?;

        let chat_repo = ChatRepository::new(self.db);
        let members = chat_repo.list_members(chat_id).await?;
        Ok(members)
    }

    /// Looks up a chat and projects its members to usernames.
    ///
    /// # Arguments
    /// - `chat_id` - ID of the chat
    ///
    /// # Returns
    /// - `Ok(MemberUsernames)` - Usernames of all members, in no particular order
    /// - `Err(AppError::NotFound)` - No chat with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_chat_members(&self, chat_id: i32) -> Result<MemberUsernames, AppError> {
        self.get_chat(chat_id).await?;

        let chat_repo = ChatRepository::new(self.db);
        let usernames = chat_repo.list_member_usernames(chat_id).await?;
        Ok(MemberUsernames(usernames))
    }

    pub async fn is_member(&self, param: ChatMembershipParam) -> Result<bool, AppError> {
        let chat_repo = ChatRepository::new(self.db);
        let is_member = chat_repo.is_member(param.chat_id, param.account_id).await?;
        Ok(is_member)
    }
}
