use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{account::AccountRepository, chat::ChatRepository, server::ServerRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::account::Account,
};

/// A requirement the logged-in account must satisfy.
pub enum Permission {
    /// Member of the server with this ID.
    ServerMember(i32),
    /// Member of the chat with this ID.
    ChatMember(i32),
}

/// Resolves the logged-in account and checks it against a list of permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in account satisfying every permission.
    ///
    /// A group that does not exist is reported as `NotFound` before membership is checked.
    ///
    /// # Returns
    /// - `Ok(Account)` - The logged-in account
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session's account was deleted
    /// - `Err(AppError::NotFound)` - A named server or chat does not exist
    /// - `Err(AuthError::AccessDenied)` - The account is not a member
    pub async fn require(&self, permissions: &[Permission]) -> Result<Account, AppError> {
        let account_repo = AccountRepository::new(self.db);

        let Some(account_id) = AuthSession::new(self.session).get_account_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(account) = account_repo.find_by_id(account_id).await? else {
            return Err(AuthError::UserNotInDatabase(account_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::ServerMember(server_id) => {
                    let server_repo = ServerRepository::new(self.db);

                    if server_repo.find_by_id(*server_id).await?.is_none() {
                        return Err(AppError::NotFound("Server not found".to_string()));
                    }

                    if !server_repo.is_member(*server_id, account_id).await? {
                        return Err(AuthError::AccessDenied(
                            account_id,
                            format!("not a member of server {}", server_id),
                        )
                        .into());
                    }
                }
                Permission::ChatMember(chat_id) => {
                    let chat_repo = ChatRepository::new(self.db);

                    if chat_repo.find_by_id(*chat_id).await?.is_none() {
                        return Err(AppError::NotFound("Chat not found".to_string()));
                    }

                    if !chat_repo.is_member(*chat_id, account_id).await? {
                        return Err(AuthError::AccessDenied(
                            account_id,
                            format!("not a member of chat {}", chat_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(account)
    }
}
