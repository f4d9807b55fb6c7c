//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by services and controllers. It wraps the
//! domain-specific errors (`AuthError`, `ValidationError`, `ConnectivityError`, `ConfigError`)
//! and implements `IntoResponse` so handlers can use `?` throughout.

pub mod auth;
pub mod config;
pub mod connectivity;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, connectivity::ConnectivityError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Domain-specific errors map themselves to responses; infrastructure errors always become a
/// 500 with a generic body while the real error is logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or membership error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Invalid or conflicting input.
    ///
    /// Delegates to `ValidationError::into_response()` for status code mapping.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// The database could not be reached.
    #[error(transparent)]
    ConnectivityErr(#[from] ConnectivityError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Password hashing or verification failed.
    #[error(transparent)]
    PasswordHashErr(#[from] bcrypt::BcryptError),

    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr` and `ValidationErr`, delegated to the wrapped error
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message so implementation details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
