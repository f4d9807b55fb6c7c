//! Test fixtures providing entity models without database insertion.
//!
//! Used to test entity-to-domain conversion without database overhead. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! ```rust,ignore
//! let account = fixture::account::entity_builder().username("user1").build();
//! ```

pub mod account;
pub mod message;

pub use account::{entity as account_entity, entity_builder as account_entity_builder};
pub use message::{entity as message_entity, entity_builder as message_entity_builder};
