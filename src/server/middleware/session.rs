//! Type-safe session management.
//!
//! Wraps the tower-sessions `Session` so that the authenticated account ID is always read and
//! written under the same key and with the same type.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_ACCOUNT_ID: &str = "auth:account";

/// Authentication session management.
///
/// Stores the ID of the logged-in account.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a logged-in session for the account.
    ///
    /// Rotates the session ID first so a session ID issued before login cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Account ID stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn set_account_id(&self, account_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_ACCOUNT_ID, account_id)
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in account's ID.
    ///
    /// # Returns
    /// - `Ok(Some(account_id))` - An account is logged in
    /// - `Ok(None)` - No account in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_account_id(&self) -> Result<Option<i32>, AppError> {
        let account_id = self.session.get::<i32>(SESSION_AUTH_ACCOUNT_ID).await?;
        Ok(account_id)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
