//! Server data repository for database operations.
//!
//! Provides the `ServerRepository` for creating and deleting servers and for maintaining their
//! membership sets. Membership changes are idempotent.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::is_unique_violation,
    model::{account::Account, server::Server},
};

/// Repository providing database operations for servers and their members.
pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    /// Creates a new ServerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ServerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new server with no members.
    ///
    /// # Arguments
    /// - `server_name` - Display name of the server
    ///
    /// # Returns
    /// - `Ok(Server)` - The created server with its fresh ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, server_name: String) -> Result<Server, DbErr> {
        let entity = entity::server::ActiveModel {
            server_name: ActiveValue::Set(server_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Server::from_entity(entity))
    }

    /// Inserts a new server with its owner as the only member, in one transaction.
    ///
    /// # Arguments
    /// - `server_name` - Display name of the server
    /// - `owner_id` - ID of an existing account
    ///
    /// # Returns
    /// - `Ok(Server)` - The created server
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create_with_owner(
        &self,
        server_name: String,
        owner_id: i32,
    ) -> Result<Server, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::server::ActiveModel {
            server_name: ActiveValue::Set(server_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::server_member::ActiveModel {
            server_id: ActiveValue::Set(entity.id),
            account_id: ActiveValue::Set(owner_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Server::from_entity(entity))
    }

    /// Finds a server by its ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Server>, DbErr> {
        let entity = entity::prelude::Server::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Server::from_entity))
    }

    /// Deletes a server and all of its membership rows.
    ///
    /// Member accounts are untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - Server deleted
    /// - `Ok(false)` - No server with that ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ServerMember::delete_many()
            .filter(entity::server_member::Column::ServerId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Server::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds an account to a server's membership set.
    ///
    /// Checks for an existing row first; a unique violation from a concurrent insert of the same
    /// pair is also treated as success.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership created
    /// - `Ok(false)` - Account was already a member
    /// - `Err(DbErr)` - Database error, e.g. a foreign key violation for unknown IDs
    pub async fn add_member(&self, server_id: i32, account_id: i32) -> Result<bool, DbErr> {
        if self.is_member(server_id, account_id).await? {
            return Ok(false);
        }

        let result = entity::prelude::ServerMember::insert(entity::server_member::ActiveModel {
            server_id: ActiveValue::Set(server_id),
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

    /// Removes an account from a server's membership set.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - Account was not a member; nothing changed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove_member(&self, server_id: i32, account_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ServerMember::delete_many()
            .filter(entity::server_member::Column::ServerId.eq(server_id))
            .filter(entity::server_member::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an account belongs to a server.
    pub async fn is_member(&self, server_id: i32, account_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ServerMember::find()
            .filter(entity::server_member::Column::ServerId.eq(server_id))
            .filter(entity::server_member::Column::AccountId.eq(account_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every member account of a server, ordered by account ID.
    pub async fn list_members(&self, server_id: i32) -> Result<Vec<Account>, DbErr> {
        let entities = entity::prelude::Account::find()
            .inner_join(entity::prelude::ServerMember)
            .filter(entity::server_member::Column::ServerId.eq(server_id))
            .order_by_asc(entity::account::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Account::from_entity).collect())
    }

    /// Gets the usernames of every member of a server.
    pub async fn list_member_usernames(&self, server_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::Account::find()
            .inner_join(entity::prelude::ServerMember)
            .filter(entity::server_member::Column::ServerId.eq(server_id))
            .order_by_asc(entity::account::Column::Id)
            .select_only()
            .column(entity::account::Column::Username)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets every server an account belongs to, ordered by server ID.
    pub async fn get_servers_for_account(&self, account_id: i32) -> Result<Vec<Server>, DbErr> {
        let entities = entity::prelude::Server::find()
            .inner_join(entity::prelude::ServerMember)
            .filter(entity::server_member::Column::AccountId.eq(account_id))
            .order_by_asc(entity::server::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Server::from_entity).collect())
    }
}
