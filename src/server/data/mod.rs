//! Database repository layer.
//!
//! Each repository borrows the pooled connection, performs the queries for one entity group and
//! converts entity models into domain models at the boundary. Repositories return `DbErr`;
//! mapping to application errors happens in the service layer.

pub mod account;
pub mod chat;
pub mod message;
pub mod server;


use sea_orm::{DbErr, SqlErr};

/// Whether a database error was raised by a unique index or primary key.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
