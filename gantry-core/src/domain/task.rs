//! Task domain types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named group of tasks within a job sharing a role (e.g. "worker")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRole {
    pub name: String,
    #[serde(default)]
    pub task_statuses: Vec<TaskStatus>,
}

/// Status of a single task within a role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    pub task_uid: Uuid,
    pub task_state: TaskState,
    #[serde(default)]
    pub retries: u32,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub launched_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub completed_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub container_ip: Option<String>,
    #[serde(default)]
    pub container_ports: HashMap<String, String>,
    #[serde(default)]
    pub attempts: Vec<TaskAttempt>,
}

/// One execution instance of a task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAttempt {
    pub attempt_index: u32,
    #[serde(default)]
    pub attempt_state: TaskState,
    #[serde(default)]
    pub exit_code: Option<i32>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub started_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub completed_time: Option<DateTime<Utc>>,
}

/// Task execution state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Waiting,
    Running,
    Succeeded,
    Failed,
    Stopped,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for TaskState {
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

/// Serde adapter for the `taskRoles` wire shape
///
/// The backend sends task roles as a JSON object keyed by role name.
/// Plain map types lose either the name (Vec) or the order (HashMap), so
/// this module folds each entry into a [`TaskRole`] in document order.
pub mod task_role_map {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{TaskRole, TaskStatus};

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct RoleBody {
        #[serde(default)]
        task_statuses: Vec<TaskStatus>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct RoleBodyRef<'a> {
        task_statuses: &'a [TaskStatus],
    }

    pub fn serialize<S>(roles: &[TaskRole], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(roles.len()))?;
        for role in roles {
            map.serialize_entry(
                &role.name,
                &RoleBodyRef {
                    task_statuses: &role.task_statuses,
                },
            )?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<TaskRole>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RoleMapVisitor;

        impl<'de> Visitor<'de> for RoleMapVisitor {
            type Value = Vec<TaskRole>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of task role name to role body")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut roles = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, body)) = access.next_entry::<String, RoleBody>()? {
                    roles.push(TaskRole {
                        name,
                        task_statuses: body.task_statuses,
                    });
                }
                Ok(roles)
            }
        }

        deserializer.deserialize_map(RoleMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_status_deserializes_wire_shape() {
        let raw = json!({
            "taskUid": "0e2d90e3-85b8-4a30-9efd-0ed1b0e1731c",
            "taskState": "RUNNING",
            "retries": 1,
            "createdTime": 1_700_000_000_000_i64,
            "launchedTime": 1_700_000_005_000_i64,
            "completedTime": null,
            "containerIp": "10.0.3.7",
            "containerPorts": { "ssh": "22", "http": "8080" },
            "attempts": [
                { "attemptIndex": 0, "attemptState": "FAILED", "exitCode": 1 },
                { "attemptIndex": 1, "attemptState": "RUNNING" }
            ]
        });

        let status: TaskStatus = serde_json::from_value(raw).unwrap();
        assert_eq!(status.task_state, TaskState::Running);
        assert_eq!(status.container_ip.as_deref(), Some("10.0.3.7"));
        assert_eq!(status.container_ports.get("ssh").map(String::as_str), Some("22"));
        assert_eq!(status.attempts.len(), 2);
        assert_eq!(status.attempts[0].attempt_state, TaskState::Failed);
    }

    #[test]
    fn test_unrecognized_task_state_maps_to_unknown() {
        let raw = json!({
            "taskUid": "0e2d90e3-85b8-4a30-9efd-0ed1b0e1731c",
            "taskState": "PREEMPTED"
        });

        let status: TaskStatus = serde_json::from_value(raw).unwrap();
        assert_eq!(status.task_state, TaskState::Unknown);
    }
}
