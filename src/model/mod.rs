//! Data transfer objects shared between the HTTP API and its clients.

pub mod account;
pub mod api;
pub mod chat;
pub mod message;
pub mod server;
