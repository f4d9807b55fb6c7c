//! Account domain models and parameters.
//!
//! `Account` is the public view of a registered identity and never carries the password hash.
//! The hash only leaves the repository inside `AccountCredentials`, which is consumed by the
//! password check and never serialized.

use chrono::{DateTime, Utc};

use crate::model::{
    account::{AccountDto, RegisterAccountDto, UpdateAccountDto},
    api::MemberUsernamesDto,
};

/// Registered identity without its credential.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    /// Time of the last successful authentication, if any.
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Converts the account domain model to a DTO for API responses.
    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            username: self.username,
            email: self.email,
            phone_number: self.phone_number,
            last_login: self.last_login,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an account domain model at the repository boundary.
    ///
    /// Drops the password hash.
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            phone_number: entity.phone_number,
            last_login: entity.last_login,
            created_at: entity.created_at,
        }
    }
}

/// An account together with its stored password hash.
pub struct AccountCredentials {
    pub account: Account,
    pub password_hash: String,
}

impl AccountCredentials {
    pub fn from_entity(entity: entity::account::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            account: Account::from_entity(entity),
            password_hash,
        }
    }
}

impl std::fmt::Debug for AccountCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("account", &self.account)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Raw registration input, validated and hashed by the account service.
#[derive(Clone)]
pub struct RegisterAccountParam {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    /// Plaintext password; only ever passed to the hasher.
    pub password: String,
}

impl RegisterAccountParam {
    pub fn from_dto(dto: RegisterAccountDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            phone_number: dto.phone_number,
            password: dto.password,
        }
    }
}

impl std::fmt::Debug for RegisterAccountParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterAccountParam")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated account row ready for insertion.
#[derive(Clone)]
pub struct CreateAccountParam {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
}

impl std::fmt::Debug for CreateAccountParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateAccountParam")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .finish_non_exhaustive()
    }
}

/// Profile changes; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAccountParam {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UpdateAccountParam {
    pub fn from_dto(dto: UpdateAccountDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            phone_number: dto.phone_number,
        }
    }
}

/// Usernames of every member of a server or chat, in no particular order.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberUsernames(pub Vec<String>);

impl MemberUsernames {
    pub fn into_dto(self) -> MemberUsernamesDto {
        MemberUsernamesDto {
            member_usernames: self.0,
        }
    }
}
