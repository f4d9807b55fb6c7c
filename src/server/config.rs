use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

const USERNAME_PLACEHOLDER: &str = "<username>";
const PASSWORD_PLACEHOLDER: &str = "<password>";

/// Process configuration, read once at startup and passed by reference from there on.
pub struct Config {
    /// Connection URI template, may contain `<username>` and `<password>` placeholders.
    pub database_uri: String,
    pub database_username: String,
    pub database_password: String,

    pub bind_address: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables were present
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        Ok(Self {
            database_uri: required("DATABASE_URI")?,
            database_username: required("DATABASE_USERNAME")?,
            database_password: required("DATABASE_PASSWORD")?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }

    /// Resolves the connection URL by substituting credentials into the URI template.
    ///
    /// The result contains the database password and must not be logged.
    pub fn database_url(&self) -> String {
        self.database_uri
            .replace(USERNAME_PLACEHOLDER, &self.database_username)
            .replace(PASSWORD_PLACEHOLDER, &self.database_password)
    }
}
