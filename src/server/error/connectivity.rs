use thiserror::Error;

/// The persistence layer could not be reached.
///
/// Raised by the startup path and the `check-database` command, both of which log it instead of
/// failing. The connection URL is never part of the message since it carries the
/// database password.
#[derive(Error, Debug)]
pub enum ConnectivityError {
    /// Opening a connection to the database failed.
    #[error("Failed to connect to the database: {0}")]
    Connect(#[source] sea_orm::DbErr),

    /// The connection was opened but did not answer a ping.
    #[error("Database did not respond to ping: {0}")]
    Ping(#[source] sea_orm::DbErr),

    /// Pending migrations could not be applied.
    #[error("Failed to apply database migrations: {0}")]
    Migrate(#[source] sea_orm::DbErr),

    /// The session table could not be created.
    #[error("Failed to prepare the session store: {0}")]
    SessionStore(#[source] sea_orm::SqlxError),
}
