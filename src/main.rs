mod model;
mod server;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::server::{
    cli::{Cli, Command},
    config::Config,
    error::AppError,
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command() {
        Command::Serve => {
            tracing::info!("Starting server");
            startup::serve(&config).await
        }
        Command::CheckDatabase => {
            startup::check_database(&config).await;
            Ok(())
        }
    }
}
