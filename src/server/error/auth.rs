use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No account ID is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find account ID in session")]
    UserNotInSession,

    /// The session references an account that no longer exists.
    ///
    /// Results in a 401 Unauthorized response; the session should be discarded.
    #[error("Account {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Username or password did not match.
    ///
    /// Deliberately does not say which of the two was wrong. Results in a 401 Unauthorized
    /// response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The account is not a member of the server or chat it tried to act on.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - Not logged in, stale session, or bad credentials
/// - 403 Forbidden - Not a member of the requested group
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
