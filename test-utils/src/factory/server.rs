//! Server factory for creating test servers and server memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers.
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    server_name: String,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory named `"Server {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            server_name: format!("Server {}", next_id()),
        }
    }

    pub fn server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    /// Builds and inserts the server entity into the database.
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            server_name: ActiveValue::Set(self.server_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}

/// Adds an account to a server's membership set.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - ID of an existing server
/// - `account_id` - ID of an existing account
pub async fn add_server_member(
    db: &DatabaseConnection,
    server_id: i32,
    account_id: i32,
) -> Result<entity::server_member::Model, DbErr> {
    entity::server_member::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        account_id: ActiveValue::Set(account_id),
    }
    .insert(db)
    .await
}
