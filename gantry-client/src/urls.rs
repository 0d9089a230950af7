//! Pure URL builders for job-adjacent services
//!
//! No I/O happens here; everything is derived from already-fetched job
//! state and configuration.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::PlatformClient;
use gantry_core::domain::config::JobConfig;
use gantry_core::domain::job::{JobInfo, JobState};
use gantry_core::domain::task::TaskState;

/// TensorBoard URL for a job, when one is reachable
///
/// Requires a runtime plugin descriptor named "tensorboard" in the config
/// extras, and the first task role's first task to be running with both a
/// `port` parameter and a container IP resolvable. Returns `None` in every
/// other case.
pub fn tensorboard_url(job_info: &JobInfo, job_config: &JobConfig) -> Option<String> {
    let plugin = job_config.runtime_plugin("tensorboard")?;
    let task = job_info
        .task_roles
        .first()?
        .task_statuses
        .first()?;

    if task.task_state != TaskState::Running {
        return None;
    }

    let port = port_value(plugin.parameter("port")?)?;
    let ip = task.container_ip.as_deref()?;
    Some(format!("http://{}:{}", ip, port))
}

/// Grafana job-level metrics URL
///
/// The time range starts at the job's creation; it ends at `now` while the
/// job is running, and at the recorded completion time otherwise.
pub fn job_metrics_url(
    grafana_url: &str,
    user: &str,
    job: &str,
    job_info: &JobInfo,
    now: DateTime<Utc>,
) -> String {
    let from = millis_or_empty(job_info.job_status.created_time);
    let to = if job_info.job_status.state == JobState::Running {
        now.timestamp_millis().to_string()
    } else {
        millis_or_empty(job_info.job_status.completed_time)
    };

    format!(
        "{}/dashboard/db/joblevelmetrics?var-job={}~{}&from={}&to={}",
        grafana_url.trim_end_matches('/'),
        user,
        job,
        from,
        to
    )
}

fn millis_or_empty(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.timestamp_millis().to_string())
        .unwrap_or_default()
}

/// Plugin port parameters arrive as numbers or strings depending on how the
/// config was authored.
fn port_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

impl PlatformClient {
    /// Grafana metrics URL for a job, using the configured Grafana base
    pub fn job_metrics_url(&self, user: &str, job: &str, job_info: &JobInfo) -> String {
        job_metrics_url(&self.config.grafana_url, user, job, job_info, Utc::now())
    }
}
