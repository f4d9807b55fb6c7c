//! Fixture for account test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::account;

pub const DEFAULT_ACCOUNT_ID: i32 = 1;
pub const DEFAULT_USERNAME: &str = "user1";
pub const DEFAULT_EMAIL: &str = "user1@example.com";
pub const DEFAULT_PHONE_NUMBER: &str = "1234567890";
/// Not a valid bcrypt hash; fixtures never go through password verification.
pub const DEFAULT_PASSWORD_HASH: &str = "$2b$04$fixturefixturefixturefixtureHASH";

/// Creates an account entity model with default values.
pub fn entity() -> account::Model {
    entity_builder().build()
}

/// Creates a customizable account entity builder.
pub fn entity_builder() -> AccountEntityBuilder {
    AccountEntityBuilder::default()
}

/// Builder for account entity models.
pub struct AccountEntityBuilder {
    id: i32,
    username: String,
    email: String,
    phone_number: String,
    last_login: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Default for AccountEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ACCOUNT_ID,
            username: DEFAULT_USERNAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            last_login: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }
}

impl AccountEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn last_login(mut self, last_login: Option<DateTime<Utc>>) -> Self {
        self.last_login = last_login;
        self
    }

    pub fn build(self) -> account::Model {
        account::Model {
            id: self.id,
            username: self.username,
            email: self.email,
            phone_number: self.phone_number,
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
            last_login: self.last_login,
            created_at: self.created_at,
        }
    }
}
