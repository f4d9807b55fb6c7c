//! Accord Test Utils
//!
//! Shared testing utilities for the Accord backend. The crate offers a builder for creating test
//! contexts backed by in-memory SQLite databases, factories that insert entity rows with sensible
//! defaults, and fixtures that build entity models without touching a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert accounts, servers, chats, memberships and messages
//! - **fixture**: In-memory entity models for conversion tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_chat_members() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let account = factory::create_account(db).await?;
//!     let chat = factory::create_chat(db).await?;
//!     factory::add_chat_member(db, chat.id, account.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
