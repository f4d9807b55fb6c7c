//! Account service for identity business logic.
//!
//! Provides the `AccountService`, which validates registration and profile input, hashes and
//! verifies passwords, and resolves account memberships. Password plaintext is only ever handed
//! to the hasher and never logged.

pub mod password;
pub mod validation;

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        account::AccountRepository, chat::ChatRepository, is_unique_violation,
        server::ServerRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        account::{Account, CreateAccountParam, RegisterAccountParam, UpdateAccountParam},
        chat::Chat,
        server::Server,
    },
};

/// Service providing business logic for accounts.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new AccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Validates and normalises every field, rejects a username or email that is already in use,
    /// then stores the account with a bcrypt hash of the password.
    ///
    /// # Arguments
    /// - `param` - Raw registration input including the plaintext password
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(AppError::ValidationErr)` - Invalid field, or username/email already taken
    /// - `Err(AppError::PasswordHashErr)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterAccountParam) -> Result<Account, AppError> {
        let username = validation::validate_username(&param.username)?;
        let email = validation::normalize_email(&param.email)?;
        let phone_number = validation::validate_phone_number(&param.phone_number)?;
        validation::validate_password(&param.password)?;

        let account_repo = AccountRepository::new(self.db);

        if account_repo.find_by_username(&username).await?.is_some() {
            return Err(ValidationError::DuplicateUsername(username).into());
        }
        if account_repo.find_by_email(&email).await?.is_some() {
            return Err(ValidationError::DuplicateEmail(email).into());
        }

        let password_hash = password::hash_password(&param.password)?;

        let account = account_repo
            .create(CreateAccountParam {
                username,
                email,
                phone_number,
                password_hash,
            })
            .await
            .map_err(map_unique_violation)?;

        tracing::info!(account_id = account.id, "Registered account");

        Ok(account)
    }

    /// Checks a username and password pair.
    ///
    /// Convenience wrapper over [`Self::verify_credentials`].
    ///
    /// # Returns
    /// - `Ok(true)` - Credentials are valid
    /// - `Ok(false)` - Unknown username or wrong password; the two are not distinguished
    /// - `Err(AppError)` - Database or hashing error
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool, AppError> {
        Ok(self.verify_credentials(username, password).await?.is_some())
    }

    /// Verifies credentials and records the login on success.
    ///
    /// The username is trimmed the same way registration trims it. An unknown username still
    /// costs one bcrypt verification.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Credentials are valid; `last_login` is now set
    /// - `Ok(None)` - Unknown username or wrong password
    /// - `Err(AppError)` - Database error, or the stored hash is malformed
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, AppError> {
        let account_repo = AccountRepository::new(self.db);

        let Some(credentials) = account_repo
            .find_credentials_by_username(username.trim())
            .await?
        else {
            password::verify_against_dummy(password);
            tracing::debug!("Login attempt for unknown username");
            return Ok(None);
        };

        if !password::verify_password(password, &credentials.password_hash)? {
            tracing::debug!(
                account_id = credentials.account.id,
                "Login attempt with wrong password"
            );
            return Ok(None);
        }

        account_repo
            .update_last_login(credentials.account.id)
            .await?;

        let account = account_repo.find_by_id(credentials.account.id).await?;

        Ok(account)
    }

    /// Retrieves an account by ID.
    ///
    /// # Returns
    /// - `Ok(Account)` - Account found
    /// - `Err(AppError::NotFound)` - No account with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_account(&self, account_id: i32) -> Result<Account, AppError> {
        let account_repo = AccountRepository::new(self.db);

        account_repo
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    /// Looks up an account by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError> {
        let account_repo = AccountRepository::new(self.db);
        let account = account_repo.find_by_username(username).await?;
        Ok(account)
    }

    /// Updates an account's username, email or phone number.
    ///
    /// Provided fields go through the same validation as registration. Uniqueness is only
    /// checked for values that actually change.
    ///
    /// # Returns
    /// - `Ok(Account)` - The updated account
    /// - `Err(AppError::NotFound)` - No account with that ID
    /// - `Err(AppError::ValidationErr)` - Invalid field or clash with another account
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_profile(
        &self,
        account_id: i32,
        param: UpdateAccountParam,
    ) -> Result<Account, AppError> {
        let account_repo = AccountRepository::new(self.db);

        let current = self.get_account(account_id).await?;

        let username = match param.username {
            Some(username) => Some(validation::validate_username(&username)?),
            None => None,
        };
        let email = match param.email {
            Some(email) => Some(validation::normalize_email(&email)?),
            None => None,
        };
        let phone_number = match param.phone_number {
            Some(phone_number) => Some(validation::validate_phone_number(&phone_number)?),
            None => None,
        };

        if let Some(username) = username.as_ref().filter(|u| **u != current.username) {
            if account_repo.find_by_username(username).await?.is_some() {
                return Err(ValidationError::DuplicateUsername(username.clone()).into());
            }
        }
        if let Some(email) = email.as_ref().filter(|e| **e != current.email) {
            if account_repo.find_by_email(email).await?.is_some() {
                return Err(ValidationError::DuplicateEmail(email.clone()).into());
            }
        }

        let updated = account_repo
            .update(
                account_id,
                UpdateAccountParam {
                    username,
                    email,
                    phone_number,
                },
            )
            .await
            .map_err(map_unique_violation)?;

        updated.ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    /// Deletes an account.
    ///
    /// Removes it from every server and chat; messages it sent stay in their chats without a
    /// sender.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::NotFound)` - No account with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete_account(&self, account_id: i32) -> Result<(), AppError> {
        let account_repo = AccountRepository::new(self.db);

        if !account_repo.delete(account_id).await? {
            return Err(AppError::NotFound("Account not found".to_string()));
        }

        tracing::info!(account_id, "Deleted account");

        Ok(())
    }

    /// Lists the servers an account belongs to, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Possibly empty
    /// - `Err(AppError::NotFound)` - No account with that ID
    pub async fn list_servers(&self, account_id: i32) -> Result<Vec<Server>, AppError> {
        self.get_account(account_id).await?;

        let server_repo = ServerRepository::new(self.db);
        let servers = server_repo.get_servers_for_account(account_id).await?;
        Ok(servers)
    }

    /// Lists the chats an account belongs to, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Chat>)` - Possibly empty
    /// - `Err(AppError::NotFound)` - No account with that ID
    pub async fn list_chats(&self, account_id: i32) -> Result<Vec<Chat>, AppError> {
        self.get_account(account_id).await?;

        let chat_repo = ChatRepository::new(self.db);
        let chats = chat_repo.get_chats_for_account(account_id).await?;
        Ok(chats)
    }
}

/// Maps a unique index violation that slipped past the lookup checks to a validation error.
fn map_unique_violation(err: DbErr) -> AppError {
    if is_unique_violation(&err) {
        ValidationError::DuplicateAccount.into()
    } else {
        err.into()
    }
}
