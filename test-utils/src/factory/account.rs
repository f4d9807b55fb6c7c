//! Account factory for creating test account entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password used when a test does not set one.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Factory for creating test accounts with customizable fields.
///
/// The password is hashed with bcrypt at minimum cost before insertion, so accounts created
/// here can be authenticated through the identity service.
///
/// # Example
///
/// ```rust,ignore
/// let account = AccountFactory::new(&db)
///     .username("user1")
///     .email("user1@example.com")
///     .password("user1pass")
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    phone_number: String,
    password: String,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"`
    /// - email: `"user{id}@example.com"`
    /// - phone_number: `"1234567890"`
    /// - password: [`DEFAULT_PASSWORD`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            phone_number: "1234567890".to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Hashing or database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        // bcrypt's minimum cost (`bcrypt::MIN_COST` is private)
        let password_hash = bcrypt::hash(&self.password, 4)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::account::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set(self.phone_number),
            password_hash: ActiveValue::Set(password_hash),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}

/// Creates an account with a specific username.
///
/// Shorthand for `AccountFactory::new(db).username(username).build().await`.
pub async fn create_account_with_username(
    db: &DatabaseConnection,
    username: impl Into<String>,
) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).username(username).build().await
}
