use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (in foreign key dependency order), then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Account, Server, ServerMember};
///
/// let test = TestBuilder::new()
///     .with_table(Account)
///     .with_table(Server)
///     .with_table(ServerMember)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax, including the
    /// foreign keys declared by its `belongs_to` relations.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for server membership operations.
    ///
    /// Adds, in dependency order: Account, Server, ServerMember.
    pub fn with_server_tables(self) -> Self {
        self.with_table(Account)
            .with_table(Server)
            .with_table(ServerMember)
    }

    /// Adds the tables required for chat and message operations.
    ///
    /// Adds, in dependency order: Account, Chat, ChatMember, Message.
    pub fn with_chat_tables(self) -> Self {
        self.with_table(Account)
            .with_table(Chat)
            .with_table(ChatMember)
            .with_table(Message)
    }

    /// Adds every table in the schema.
    ///
    /// Used by tests touching accounts, where deletion has to reach both kinds of membership
    /// and the message log.
    pub fn with_all_tables(self) -> Self {
        self.with_chat_tables()
            .with_table(Server)
            .with_table(ServerMember)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
