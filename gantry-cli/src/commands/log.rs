//! Container log command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use super::surface;
use crate::config::Config;

/// Log subcommands
#[derive(Subcommand)]
pub enum LogCommands {
    /// Fetch a container log URL and print the normalized result
    Fetch {
        /// Container log URL (from the job's task status)
        url: String,
    },
}

/// Handle log commands
pub async fn handle_log_command(command: LogCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        LogCommands::Fetch { url } => {
            let log = client.get_container_log(&url).await.map_err(surface)?;

            if let Some(text) = &log.text {
                println!("{}", text);
            }
            println!();
            println!("{} {}", "Full log:".bold(), log.full_log_link);
            Ok(())
        }
    }
}
