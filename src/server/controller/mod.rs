//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, convert DTOs into parameter types,
//! call a service and convert the resulting domain model back into a DTO.

pub mod account;
pub mod auth;
pub mod chat;
pub mod message;
pub mod server;
