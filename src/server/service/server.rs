//! Server service for grouping business logic.
//!
//! Provides the `ServerService` for creating servers with an owner, managing their membership
//! sets and reporting their members. Unknown server or account IDs become `NotFound` errors
//! before any write is attempted.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountRepository, server::ServerRepository},
    error::{validation::ValidationError, AppError},
    model::{
        account::{Account, MemberUsernames},
        server::{CreateServerParam, Server, ServerMembershipParam},
    },
};

pub const SERVER_NAME_MAX_LEN: usize = 50;

/// Service providing business logic for servers.
pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    /// Creates a new ServerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ServerService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a server whose first member is its owner.
    ///
    /// # Arguments
    /// - `param` - Owner account ID and server name
    ///
    /// # Returns
    /// - `Ok(Server)` - The created server
    /// - `Err(AppError::ValidationErr)` - Name empty or longer than 50 characters
    /// - `Err(AppError::NotFound)` - Owner account does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create_server(&self, param: CreateServerParam) -> Result<Server, AppError> {
        let server_name = param.server_name.trim();
        if server_name.is_empty() {
            return Err(ValidationError::MissingField("server_name").into());
        }
        if server_name.chars().count() > SERVER_NAME_MAX_LEN {
            return Err(ValidationError::FieldTooLong {
                field: "server_name",
                max: SERVER_NAME_MAX_LEN,
            }
            .into());
        }

        self.require_account(param.owner_id).await?;

        let server_repo = ServerRepository::new(self.db);
        let server = server_repo
            .create_with_owner(server_name.to_string(), param.owner_id)
            .await?;

        tracing::info!(server_id = server.id, owner_id = param.owner_id, "Created server");

        Ok(server)
    }

    /// Retrieves a server by ID.
    ///
    /// # Returns
    /// - `Ok(Server)` - Server found
    /// - `Err(AppError::NotFound)` - No server with that ID
    pub async fn get_server(&self, server_id: i32) -> Result<Server, AppError> {
        let server_repo = ServerRepository::new(self.db);

        server_repo
            .find_by_id(server_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Server not found".to_string()))
    }

    /// Deletes a server and its memberships.
    ///
    /// # Returns
    /// - `Ok(())` - Server deleted
    /// - `Err(AppError::NotFound)` - No server with that ID
    pub async fn delete_server(&self, server_id: i32) -> Result<(), AppError> {
        let server_repo = ServerRepository::new(self.db);

        if !server_repo.delete(server_id).await? {
            return Err(AppError::NotFound("Server not found".to_string()));
        }

        Ok(())
    }

    /// Adds an account to a server.
    ///
    /// Adding an existing member changes nothing.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership created
    /// - `Ok(false)` - Already a member
    /// - `Err(AppError::NotFound)` - Server or account does not exist
    pub async fn add_member(&self, param: ServerMembershipParam) -> Result<bool, AppError> {
        self.get_server(param.server_id).await?;
        self.require_account(param.account_id).await?;

        let server_repo = ServerRepository::new(self.db);
        let added = server_repo
            .add_member(param.server_id, param.account_id)
            .await?;
        Ok(added)
    }

    /// Removes an account from a server.
    ///
    /// Removing a non-member changes nothing.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - Was not a member
    /// - `Err(AppError::NotFound)` - Server does not exist
    pub async fn remove_member(&self, param: ServerMembershipParam) -> Result<bool, AppError> {
        self.get_server(param.server_id).await?;

        let server_repo = ServerRepository::new(self.db);
        let removed = server_repo
            .remove_member(param.server_id, param.account_id)
            .await?;
        Ok(removed)
    }

    /// Lists the accounts belonging to a server.
    pub async fn list_members(&self, server_id: i32) -> Result<Vec<Account>, AppError> {
        self.get_server(server_id).await?;

        let server_repo = ServerRepository::new(self.db);
        let members = server_repo.list_members(server_id).await?;
        Ok(members)
    }

    /// Projects a server's members to their usernames.
    ///
    /// # Returns
    /// - `Ok(MemberUsernames)` - Possibly empty
    /// - `Err(AppError::NotFound)` - No server with that ID
    pub async fn get_server_members(&self, server_id: i32) -> Result<MemberUsernames, AppError> {
        self.get_server(server_id).await?;

        let server_repo = ServerRepository::new(self.db);
        let usernames = server_repo.list_member_usernames(server_id).await?;
        Ok(MemberUsernames(usernames))
    }

    pub async fn is_member(&self, param: ServerMembershipParam) -> Result<bool, AppError> {
        let server_repo = ServerRepository::new(self.db);
        let is_member = server_repo
            .is_member(param.server_id, param.account_id)
            .await?;
        Ok(is_member)
    }

    async fn require_account(&self, account_id: i32) -> Result<(), AppError> {
        let account_repo = AccountRepository::new(self.db);
        if account_repo.find_by_id(account_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Account {} not found", account_id)));
        }
        Ok(())
    }
}
