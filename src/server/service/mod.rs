//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer. They validate input, enforce
//! membership rules, turn missing rows into `NotFound` errors and coordinate calls across
//! repositories. They work with domain models rather than DTOs or entity models.

pub mod account;
pub mod chat;
pub mod message;
pub mod server;
