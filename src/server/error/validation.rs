use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected input on account registration, profile updates, group creation or message posting.
///
/// Messages are safe to return to the client as-is.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was missing or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field exceeded its maximum length, counted in characters except for passwords, which
    /// are counted in bytes.
    #[error("{field} is too long (maximum {max})")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Phone number must be exactly 10 digits")]
    InvalidPhoneNumber,

    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error("Email '{0}' is already registered")]
    DuplicateEmail(String),

    /// A unique constraint fired after the lookup checks passed, e.g. under concurrent
    /// registration.
    #[error("An account with that username or email already exists")]
    DuplicateAccount,

    /// Only current members of a chat may post to it.
    #[error("Account {account_id} is not a member of chat {chat_id}")]
    SenderNotMember { chat_id: i32, account_id: i32 },
}

/// Converts validation errors into HTTP responses.
///
/// # Returns
/// - 409 Conflict - Username or email already in use
/// - 403 Forbidden - Sender is not a member of the chat
/// - 400 Bad Request - Everything else
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DuplicateUsername(_) | Self::DuplicateEmail(_) | Self::DuplicateAccount => {
                StatusCode::CONFLICT
            }
            Self::SenderNotMember { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
