use clap::{Parser, Subcommand};

/// Chat backend serving accounts, servers, chats and messages over HTTP.
#[derive(Debug, Parser)]
#[command(name = "accord", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run migrations, ping the database and start the HTTP server (default).
    Serve,
    /// Connect to the database and ping it, then exit.
    CheckDatabase,
}

impl Cli {
    /// The subcommand to run, `Serve` when none was given.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
