use axum::Router;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{connectivity::ConnectivityError, AppError},
    router,
    state::AppState,
};

/// Creates a connection pool for the database described by `config`.
///
/// The pool connects lazily, so an unreachable database is not an error here; it surfaces on
/// the first ping or query.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool ready to hand out connections; no migrations have run yet
/// - `Err(ConnectivityError::Connect)` - The connection URL could not be used at all
pub async fn open_database(config: &Config) -> Result<DatabaseConnection, ConnectivityError> {
    let mut opt = ConnectOptions::new(config.database_url());
    opt.sqlx_logging(false).connect_lazy(true);

    Database::connect(opt)
        .await
        .map_err(ConnectivityError::Connect)
}

/// Pings the database.
///
/// # Returns
/// - `Ok(())` - The database answered
/// - `Err(ConnectivityError::Ping)` - The ping failed
pub async fn ping_database(db: &DatabaseConnection) -> Result<(), ConnectivityError> {
    db.ping().await.map_err(ConnectivityError::Ping)
}

/// Pings the database and logs the outcome.
///
/// A failed ping is logged and otherwise ignored; it never stops startup.
///
/// # Returns
/// - `true` - The database answered the ping
/// - `false` - The ping failed
pub async fn report_database_connection(db: &DatabaseConnection) -> bool {
    match ping_database(db).await {
        Ok(()) => {
            tracing::info!("Successfully connected to the database");
            true
        }
        Err(err) => {
            tracing::error!("{}", err);
            false
        }
    }
}

/// Runs pending SeaORM migrations, logging a failure instead of returning it.
///
/// # Returns
/// - `true` - The schema is up to date
/// - `false` - Migrations failed; the error has been logged
pub async fn migrate_database(db: &DatabaseConnection) -> bool {
    match Migrator::up(db, None).await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!("{}", ConnectivityError::Migrate(err));
            false
        }
    }
}

/// Creates the session layer backed by the application's SQLite pool.
///
/// Creates the session table if needed, then builds a layer whose sessions expire after seven
/// days of inactivity. When the table cannot be created the failure is logged and the layer is
/// still returned; requests that touch the session then fail individually.
///
/// # Arguments
/// - `db` - Database connection whose pool stores the sessions
pub async fn connect_to_session(db: &DatabaseConnection) -> SessionManagerLayer<SqliteStore> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    if let Err(err) = session_store.migrate().await {
        tracing::error!("{}", ConnectivityError::SessionStore(err));
    }

    SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)))
}

/// Prepares the database and builds the application router.
///
/// Connectivity problems during the startup ping, migrations or session table creation are
/// logged and startup carries on; only an unusable connection URL is returned as an error.
///
/// # Returns
/// - `Ok(Router)` - Router with state, session and trace layers applied
/// - `Err(AppError::ConnectivityErr)` - The connection URL could not be used
pub async fn build_app(config: &Config) -> Result<Router, AppError> {
    let db = open_database(config).await?;

    if report_database_connection(&db).await {
        migrate_database(&db).await;
    }

    let session = connect_to_session(&db).await;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Runs the HTTP server until ctrl-c is received.
pub async fn serve(config: &Config) -> Result<(), AppError> {
    let app = build_app(config).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_address.as_str()).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Opens the database and pings it, logging either outcome.
///
/// Failures are logged rather than returned.
pub async fn check_database(config: &Config) {
    match open_database(config).await {
        Ok(db) => {
            report_database_connection(&db).await;
        }
        Err(err) => tracing::error!("{}", err),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
}
