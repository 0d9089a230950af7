//! Task command handlers

use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;
use colored::*;
use gantry_core::domain::task::{TaskState, TaskStatus};
use gantry_core::fmt::{duration_between, timestamp_string};

use super::surface;
use crate::config::Config;

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Show the status and attempt history of one task
    Status {
        /// Job owner
        user: String,
        /// Job name
        job: String,
        /// Job attempt index
        #[arg(long, default_value_t = 0)]
        attempt: u32,
        /// Task role name
        #[arg(long)]
        role: String,
        /// Task index within the role
        #[arg(long, default_value_t = 0)]
        index: u32,
    },
}

/// Handle task commands
pub async fn handle_task_command(command: TaskCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        TaskCommands::Status {
            user,
            job,
            attempt,
            role,
            index,
        } => {
            let status = client
                .get_task_status(&user, &job, attempt, &role, index)
                .await
                .map_err(surface)?;
            print_task(&role, index, &status);
            Ok(())
        }
    }
}

fn print_task(role: &str, index: u32, status: &TaskStatus) {
    let now = Utc::now();
    println!(
        "{}  {}",
        format!("{}[{}]", role, index).bold(),
        state_badge(status.task_state)
    );
    println!("  Uid:       {}", status.task_uid);
    println!("  Retries:   {}", status.retries);
    println!("  Created:   {}", timestamp_string(status.created_time));
    println!("  Launched:  {}", timestamp_string(status.launched_time));
    println!("  Completed: {}", timestamp_string(status.completed_time));
    if let Some(duration) = duration_between(status.launched_time, status.completed_time, now) {
        println!("  Duration:  {}", duration);
    }
    if let Some(ip) = &status.container_ip {
        println!("  Container: {}", ip);
    }

    if !status.attempts.is_empty() {
        println!("  Attempts:");
        for attempt in &status.attempts {
            println!(
                "    #{}  {}  started {}  completed {}{}",
                attempt.attempt_index,
                state_badge(attempt.attempt_state),
                timestamp_string(attempt.started_time),
                timestamp_string(attempt.completed_time),
                attempt
                    .exit_code
                    .map(|c| format!("  exit {}", c))
                    .unwrap_or_default()
            );
        }
    }
}

fn state_badge(state: TaskState) -> ColoredString {
    match state {
        TaskState::Running => state.to_string().cyan(),
        TaskState::Succeeded => state.to_string().green(),
        TaskState::Failed => state.to_string().red(),
        TaskState::Stopped => state.to_string().yellow(),
        TaskState::Waiting | TaskState::Unknown => state.to_string().normal(),
    }
}
