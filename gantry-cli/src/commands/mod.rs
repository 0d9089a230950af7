//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;
mod log;
mod task;

pub use job::JobCommands;
pub use log::LogCommands;
pub use task::TaskCommands;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use gantry_client::ClientError;

use crate::config::Config;
use crate::session;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Job views and commands
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Task attempt views
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Container log retrieval
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Job { command } => job::handle_job_command(command, config).await,
        Commands::Task { command } => task::handle_task_command(command, config).await,
        Commands::Log { command } => log::handle_log_command(command, config).await,
    }
}

/// Surface a client error to the user
///
/// The client classifies errors but deliberately leaves the session
/// reaction to its caller: on an unauthorized failure the cached token is
/// cleared here before the message is reported.
pub(crate) fn surface(err: ClientError) -> anyhow::Error {
    if err.is_unauthorized() {
        session::clear_token();
        eprintln!(
            "{}",
            "Session rejected by the server; cached token cleared, please log in again.".red()
        );
    }
    anyhow::Error::new(err)
}
