//! Account data repository for database operations.
//!
//! Provides the `AccountRepository` for registering, looking up, updating and deleting accounts.
//! Deletion runs in a single transaction that removes every membership row of the account and
//! detaches its messages, which stay in their chats with no sender.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::server::model::account::{
    Account, AccountCredentials, CreateAccountParam, UpdateAccountParam,
};

/// Repository providing database operations for accounts.
pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// The caller is responsible for validation and hashing; this only writes the row.
    ///
    /// # Arguments
    /// - `param` - Validated account fields including the password hash
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(DbErr)` - Database error, including unique violations on username or email
    pub async fn create(&self, param: CreateAccountParam) -> Result<Account, DbErr> {
        let entity = entity::account::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            phone_number: ActiveValue::Set(param.phone_number),
            password_hash: ActiveValue::Set(param.password_hash),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    /// Finds an account by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Finds an account by its exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Finds an account by its exact (already normalised) email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Loads an account together with its password hash for verification.
    ///
    /// # Returns
    /// - `Ok(Some(AccountCredentials))` - Account found
    /// - `Ok(None)` - No account with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountCredentials>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(AccountCredentials::from_entity))
    }

    /// Applies profile changes to an existing account.
    ///
    /// Only fields set to `Some` are written.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - The updated account
    /// - `Ok(None)` - No account with that ID
    /// - `Err(DbErr)` - Database error, including unique violations
    pub async fn update(
        &self,
        id: i32,
        param: UpdateAccountParam,
    ) -> Result<Option<Account>, DbErr> {
        let Some(existing) = entity::prelude::Account::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::account::ActiveModel = existing.into();
        if let Some(username) = param.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(phone_number) = param.phone_number {
            active.phone_number = ActiveValue::Set(phone_number);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Account::from_entity(entity)))
    }

    /// Sets the account's last login time to now.
    pub async fn update_last_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Account::update_many()
            .filter(entity::account::Column::Id.eq(id))
            .col_expr(
                entity::account::Column::LastLogin,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes an account, its server and chat memberships, and its authorship of messages.
    ///
    /// Messages written by the account are kept with `sender_id` set to null.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that ID; nothing changed
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ServerMember::delete_many()
            .filter(entity::server_member::Column::AccountId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::ChatMember::delete_many()
            .filter(entity::chat_member::Column::AccountId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Message::update_many()
            .filter(entity::message::Column::SenderId.eq(id))
            .col_expr(
                entity::message::Column::SenderId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .exec(&txn)
            .await?;

        let result = entity::prelude::Account::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
