use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env` file or the process environment for the named variable.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
