//! SeaORM entity models for the Accord schema.
//!
//! Each module mirrors one table created by the `migration` crate. The repositories in the
//! main crate convert these models into domain models at the data layer boundary, so nothing
//! outside `data/` and `test-utils` should depend on their exact shape.

pub mod prelude;

pub mod account;
pub mod chat;
pub mod chat_member;
pub mod message;
pub mod server;
pub mod server_member;
