//! Job command handlers
//!
//! Renders job status, retry history, configuration and derived links
//! from the normalized client model.

use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;
use colored::*;
use gantry_client::{PlatformClient, urls};
use gantry_core::domain::attempt::JobAttempt;
use gantry_core::domain::job::{JobInfo, JobState};
use gantry_core::fmt::{duration_between, timestamp_string};

use super::surface;
use crate::config::Config;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Show job status
    Status {
        /// Job owner
        user: String,
        /// Job name
        job: String,
    },
    /// Print the submitted job configuration
    Config {
        /// Job owner
        user: String,
        /// Job name
        job: String,
    },
    /// List historical retries of a job
    Retries {
        /// Job owner
        user: String,
        /// Job name
        job: String,
    },
    /// Stop a running job
    Stop {
        /// Job owner
        user: String,
        /// Job name
        job: String,
    },
    /// Show SSH endpoints of the job's containers
    Ssh {
        /// Job owner
        user: String,
        /// Job name
        job: String,
    },
    /// Print the Grafana metrics URL for a job
    MetricsUrl {
        /// Job owner
        user: String,
        /// Job name
        job: String,
    },
    /// Print the TensorBoard URL for a job, if reachable
    TensorboardUrl {
        /// Job owner
        user: String,
        /// Job name
        job: String,
    },
}

/// Handle job commands
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        JobCommands::Status { user, job } => show_status(&client, &user, &job).await,
        JobCommands::Config { user, job } => show_config(&client, &user, &job).await,
        JobCommands::Retries { user, job } => show_retries(&client, &user, &job).await,
        JobCommands::Stop { user, job } => stop_job(&client, &user, &job).await,
        JobCommands::Ssh { user, job } => show_ssh(&client, &user, &job).await,
        JobCommands::MetricsUrl { user, job } => show_metrics_url(&client, &user, &job).await,
        JobCommands::TensorboardUrl { user, job } => {
            show_tensorboard_url(&client, &user, &job).await
        }
    }
}

async fn show_status(client: &PlatformClient, user: &str, job: &str) -> Result<()> {
    let info = client.get_job(user, job).await.map_err(surface)?;
    print_job(&info);
    Ok(())
}

async fn show_config(client: &PlatformClient, user: &str, job: &str) -> Result<()> {
    let config = client.get_job_config(user, job).await.map_err(surface)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

async fn show_retries(client: &PlatformClient, user: &str, job: &str) -> Result<()> {
    let result = client.fetch_job_retries(user, job).await;

    if !result.succeeded {
        let message = result
            .error_message
            .unwrap_or_else(|| "Some errors occurred!".to_string());
        println!("{}", message.yellow());
        return Ok(());
    }

    let retries = result.job_retries.unwrap_or_default();
    if retries.is_empty() {
        println!("{}", "No historical retries.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} retries:", retries.len()).bold());
    println!();
    for retry in &retries {
        print_retry(retry);
    }
    Ok(())
}

async fn stop_job(client: &PlatformClient, user: &str, job: &str) -> Result<()> {
    client.stop_job(user, job).await.map_err(surface)?;
    println!("{}", format!("Stop requested for {}~{}", user, job).green());
    Ok(())
}

async fn show_ssh(client: &PlatformClient, user: &str, job: &str) -> Result<()> {
    let ssh = client.get_ssh_info(user, job).await.map_err(surface)?;

    if ssh.containers.is_empty() {
        println!("{}", "No SSH endpoints available.".yellow());
        return Ok(());
    }

    for container in &ssh.containers {
        println!(
            "{}  {}",
            container.id.bold(),
            format!("{}:{}", container.ssh_ip, container.ssh_port)
        );
    }
    Ok(())
}

async fn show_metrics_url(client: &PlatformClient, user: &str, job: &str) -> Result<()> {
    let info = client.get_job(user, job).await.map_err(surface)?;
    println!("{}", client.job_metrics_url(user, job, &info));
    Ok(())
}

async fn show_tensorboard_url(client: &PlatformClient, user: &str, job: &str) -> Result<()> {
    let info = client.get_job(user, job).await.map_err(surface)?;
    let job_config = client.get_job_config(user, job).await.map_err(surface)?;

    match urls::tensorboard_url(&info, &job_config) {
        Some(url) => println!("{}", url),
        None => println!("{}", "TensorBoard is not reachable for this job.".yellow()),
    }
    Ok(())
}

fn print_job(info: &JobInfo) {
    let status = &info.job_status;
    println!("{}  {}", info.name.bold(), state_badge(status.state));
    println!("  Retries:   {}", status.retries);
    println!("  Created:   {}", timestamp_string(status.created_time));
    println!("  Launched:  {}", timestamp_string(status.launched_time));
    println!("  Completed: {}", timestamp_string(status.completed_time));
    if let Some(duration) =
        duration_between(status.launched_time, status.completed_time, Utc::now())
    {
        println!("  Duration:  {}", duration);
    }
    if let Some(code) = status.app_exit_code {
        println!("  Exit code: {}", code);
    }
    for role in &info.task_roles {
        println!("  Role {} ({} task(s))", role.name.bold(), role.task_statuses.len());
        for task in &role.task_statuses {
            println!("    [{}] {}", task.task_uid, task.task_state);
        }
    }
}

fn print_retry(retry: &JobAttempt) {
    println!(
        "#{}  {}  created {}  completed {}{}",
        retry.attempt_index,
        state_badge(retry.state),
        timestamp_string(retry.created_time),
        timestamp_string(retry.completed_time),
        retry
            .exit_code
            .map(|c| format!("  exit {}", c))
            .unwrap_or_default()
    );
}

fn state_badge(state: JobState) -> ColoredString {
    match state {
        JobState::Running => state.to_string().cyan(),
        JobState::Succeeded => state.to_string().green(),
        JobState::Failed => state.to_string().red(),
        JobState::Stopped => state.to_string().yellow(),
        JobState::Waiting | JobState::Unknown => state.to_string().normal(),
    }
}
