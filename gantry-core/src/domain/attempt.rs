//! Job attempt domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::job::JobState;

/// One execution instance of a job
///
/// A job that restarts accumulates attempts; the attempt history endpoint
/// returns them ordered by `attempt_index` with exactly one entry marked
/// `is_latest`. The "retry list" shown to users is every attempt that is
/// not the latest one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAttempt {
    pub attempt_index: u32,
    pub is_latest: bool,
    #[serde(default)]
    pub state: JobState,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub completed_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exit_code: Option<i32>,
}
