//! Chat data repository for database operations.
//!
//! Provides the `ChatRepository` for creating and deleting chats and for maintaining their
//! membership sets. Deleting a chat removes its message log in the same transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::is_unique_violation,
    model::{account::Account, chat::Chat},
};

/// Repository providing database operations for chats and their members.
pub struct ChatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatRepository<'a> {
    /// Creates a new ChatRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ChatRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new chat with no members.
    pub async fn create(&self) -> Result<Chat, DbErr> {
        let entity = entity::chat::ActiveModel {
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Chat::from_entity(entity))
    }

    /// Inserts a new chat together with its initial members in one transaction.
    ///
    /// # Arguments
    /// - `member_ids` - IDs of existing accounts; must not contain duplicates
    ///
    /// # Returns
    /// - `Ok(Chat)` - The created chat
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create_with_members(&self, member_ids: &[i32]) -> Result<Chat, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::chat::ActiveModel {
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if !member_ids.is_empty() {
            let members = member_ids
                .iter()
                .map(|account_id| entity::chat_member::ActiveModel {
                    chat_id: ActiveValue::Set(entity.id),
                    account_id: ActiveValue::Set(*account_id),
                });
            entity::prelude::ChatMember::insert_many(members)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(Chat::from_entity(entity))
    }

    /// Finds a chat by its ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Chat>, DbErr> {
        let entity = entity::prelude::Chat::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Chat::from_entity))
    }

    /// Deletes a chat, its messages and its membership rows.
    ///
    /// # Returns
    /// - `Ok(true)` - Chat deleted
    /// - `Ok(false)` - No chat with that ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Message::delete_many()
            .filter(entity::message::Column::ChatId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::ChatMember::delete_many()
            .filter(entity::chat_member::Column::ChatId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Chat::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds an account to a chat's membership set.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership created
    /// - `Ok(false)` - Account was already a member
    /// - `Err(DbErr)` - Database error, e.g. a foreign key violation for unknown IDs
    pub async fn add_member(&self, chat_id: i32, account_id: i32) -> Result<bool, DbErr> {
        if self.is_member(chat_id, account_id).await? {
            return Ok(false);
        }

        let result = entity::prelude::ChatMember::insert(entity::chat_member::ActiveModel {
            chat_id: ActiveValue::Set(chat_id),
            account_id: ActiveValue::Set(account_id),
        })
        .exec(self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) if is_unique_violation(&err) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Removes an account from a chat's membership set.
    ///
    /// Messages the account already posted stay in the log.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - Account was not a member; nothing changed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove_member(&self, chat_id: i32, account_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ChatMember::delete_many()
            .filter(entity::chat_member::Column::ChatId.eq(chat_id))
            .filter(entity::chat_member::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an account belongs to a chat.
    pub async fn is_member(&self, chat_id: i32, account_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ChatMember::find()
            .filter(entity::chat_member::Column::ChatId.eq(chat_id))
            .filter(entity::chat_member::Column::AccountId.eq(account_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every member account of a chat, ordered by account ID.
    pub async fn list_members(&self, chat_id: i32) -> Result<Vec<Account>, DbErr> {
        let entities = entity::prelude::Account::find()
            .inner_join(entity::prelude::ChatMember)
            .filter(entity::chat_member::Column::ChatId.eq(chat_id))
            .order_by_asc(entity::account::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Account::from_entity).collect())
    }

    /// Gets the usernames of every member of a chat.
    pub async fn list_member_usernames(&self, chat_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::Account::find()
            .inner_join(entity::prelude::ChatMember)
            .filter(entity::chat_member::Column::ChatId.eq(chat_id))
            .order_by_asc(entity::account::Column::Id)
            .select_only()
            .column(entity::account::Column::Username)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets every chat an account belongs to, ordered by chat ID.
    pub async fn get_chats_for_account(&self, account_id: i32) -> Result<Vec<Chat>, DbErr> {
        let entities = entity::prelude::Chat::find()
            .inner_join(entity::prelude::ChatMember)
            .filter(entity::chat_member::Column::AccountId.eq(account_id))
            .order_by_asc(entity::chat::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Chat::from_entity).collect())
    }
}
