//! Job domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::task::{self, TaskRole};

/// Full job view returned by the job endpoint
///
/// `task_roles` arrives on the wire as a JSON object keyed by role name.
/// Deserialization preserves the document order of that object, because
/// callers treat "the first task role" as meaningful (e.g. when deriving
/// a TensorBoard URL).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInfo {
    pub name: String,
    pub job_status: JobStatusBlock,
    #[serde(default, with = "task::task_role_map")]
    pub task_roles: Vec<TaskRole>,
}

/// Status block of a job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusBlock {
    pub state: JobState,
    #[serde(default)]
    pub retries: u32,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub launched_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub completed_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub app_exit_code: Option<i32>,
}

/// Job execution state
///
/// States the backend does not advertise in this list deserialize to
/// `Unknown` instead of failing the whole response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    Waiting,
    Running,
    Succeeded,
    Failed,
    Stopped,
    #[default]
    #[serde(other)]
    Unknown,
}

impl JobState {
    /// Whether the job has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Stopped)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Waiting => "WAITING",
            Self::Running => "RUNNING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Stopped => "STOPPED",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_info_deserializes_wire_shape() {
        let raw = json!({
            "name": "mnist-train",
            "jobStatus": {
                "state": "RUNNING",
                "retries": 2,
                "createdTime": 1_700_000_000_000_i64,
                "launchedTime": 1_700_000_060_000_i64,
                "completedTime": null
            },
            "taskRoles": {
                "worker": { "taskStatuses": [] },
                "ps": { "taskStatuses": [] }
            }
        });

        let info: JobInfo = serde_json::from_value(raw).unwrap();
        assert_eq!(info.name, "mnist-train");
        assert_eq!(info.job_status.state, JobState::Running);
        assert_eq!(info.job_status.retries, 2);
        assert_eq!(
            info.job_status.created_time.unwrap().timestamp_millis(),
            1_700_000_000_000
        );
        assert!(info.job_status.completed_time.is_none());
    }

    #[test]
    fn test_task_roles_preserve_document_order() {
        let raw = r#"{
            "name": "j",
            "jobStatus": { "state": "SUCCEEDED" },
            "taskRoles": {
                "zeta": { "taskStatuses": [] },
                "alpha": { "taskStatuses": [] },
                "mid": { "taskStatuses": [] }
            }
        }"#;

        let info: JobInfo = serde_json::from_str(raw).unwrap();
        let names: Vec<&str> = info.task_roles.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_unrecognized_state_maps_to_unknown() {
        let raw = json!({
            "name": "j",
            "jobStatus": { "state": "ARCHIVED" },
            "taskRoles": {}
        });

        let info: JobInfo = serde_json::from_value(raw).unwrap();
        assert_eq!(info.job_status.state, JobState::Unknown);
    }

    #[test]
    fn test_terminal_states() {
        assert!(JobState::Succeeded.is_terminal());
        assert!(JobState::Failed.is_terminal());
        assert!(JobState::Stopped.is_terminal());
        assert!(!JobState::Running.is_terminal());
        assert!(!JobState::Waiting.is_terminal());
    }
}
