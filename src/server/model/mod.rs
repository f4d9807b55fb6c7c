//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and transformed to
//! DTOs at the controller boundary. Parameter types carry the input of a single operation from
//! the controller into the service layer.

pub mod account;
pub mod chat;
pub mod message;
pub mod server;
