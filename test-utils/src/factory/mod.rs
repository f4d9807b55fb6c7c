//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they care
//! about. Each entity has a `*Factory` builder for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let account = factory::create_account(&db).await?;
//! let (server, owner) = factory::helpers::create_server_with_member(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let account = factory::account::AccountFactory::new(&db)
//!     .username("user1")
//!     .password("user1pass")
//!     .build()
//!     .await?;
//! ```

pub mod account;
pub mod chat;
pub mod helpers;
pub mod message;
pub mod server;

pub use account::create_account;
pub use chat::{add_chat_member, create_chat};
pub use message::create_message;
pub use server::{add_server_member, create_server};
