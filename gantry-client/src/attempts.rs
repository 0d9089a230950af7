//! Attempt history endpoints and retry reconciliation
//!
//! The attempts subsystem is optional on older deployments, so every read
//! is gated behind a healthz probe. [`PlatformClient::fetch_job_retries`]
//! reconciles the probe, the fetch and the latest-attempt marker into one
//! result that encodes all failure paths as data; it never returns an error.

use reqwest::Method;
use tracing::debug;

use crate::PlatformClient;
use crate::error::Result;
use gantry_core::domain::attempt::JobAttempt;

/// Fixed diagnostic when the attempts subsystem probe fails
pub const ATTEMPT_API_DOWN: &str = "Attempts API is not working!";
/// Fixed diagnostic when the backend has no attempts for the job
pub const NO_ATTEMPTS_FOUND: &str = "Could not find any attempts of this job!";
/// Fixed diagnostic for any other attempt-fetch failure
pub const ATTEMPT_FETCH_FAILED: &str = "Some errors occurred!";

/// Outcome of a retry-history fetch
///
/// Mirrors what the retry panel renders: either the historical retries, or
/// a user-facing message explaining why there are none.
#[derive(Debug, Clone)]
pub struct JobRetriesResult {
    pub succeeded: bool,
    pub error_message: Option<String>,
    pub job_retries: Option<Vec<JobAttempt>>,
}

impl JobRetriesResult {
    fn retries(job_retries: Vec<JobAttempt>) -> Self {
        Self {
            succeeded: true,
            error_message: None,
            job_retries: Some(job_retries),
        }
    }

    fn failed(message: &str) -> Self {
        Self {
            succeeded: false,
            error_message: Some(message.to_string()),
            job_retries: None,
        }
    }
}

/// Historical retries: every attempt except the one marked latest
///
/// Backend order is preserved.
pub fn retries_of(attempts: Vec<JobAttempt>) -> Vec<JobAttempt> {
    attempts.into_iter().filter(|a| !a.is_latest).collect()
}

impl PlatformClient {
    // =============================================================================
    // Attempt History
    // =============================================================================

    /// Probe whether the attempts subsystem is available
    ///
    /// Any failure (transport or status) means "not available"; no error
    /// escapes this call.
    pub async fn check_attempt_api(&self, user: &str, job: &str) -> bool {
        match self.get_attempts_healthz(user, job).await {
            Ok(()) => true,
            Err(err) => {
                debug!(user, job, %err, "attempts healthz probe failed");
                false
            }
        }
    }

    async fn get_attempts_healthz(&self, user: &str, job: &str) -> Result<()> {
        let url = format!(
            "{}/api/v2/jobs/{}/job-attempts/healthz",
            self.server_url(),
            Self::job_segment(user, job)
        );
        let response = self.request(Method::GET, &url).send().await?;

        self.handle_empty_response(response).await
    }

    /// Get the full attempt list of a job, backend order preserved
    pub async fn get_job_attempts(&self, user: &str, job: &str) -> Result<Vec<JobAttempt>> {
        let url = format!(
            "{}/api/v2/jobs/{}/job-attempts",
            self.server_url(),
            Self::job_segment(user, job)
        );
        let response = self.request(Method::GET, &url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the historical retries of a job
    ///
    /// All failure paths are encoded in the returned value:
    /// - probe failure short-circuits with [`ATTEMPT_API_DOWN`]; the data
    ///   fetch is not attempted
    /// - a not-found fetch yields [`NO_ATTEMPTS_FOUND`]
    /// - any other fetch failure yields [`ATTEMPT_FETCH_FAILED`]
    pub async fn fetch_job_retries(&self, user: &str, job: &str) -> JobRetriesResult {
        if !self.check_attempt_api(user, job).await {
            return JobRetriesResult::failed(ATTEMPT_API_DOWN);
        }

        match self.get_job_attempts(user, job).await {
            Ok(attempts) => JobRetriesResult::retries(retries_of(attempts)),
            Err(err) if err.is_not_found() => JobRetriesResult::failed(NO_ATTEMPTS_FOUND),
            Err(err) => {
                debug!(user, job, %err, "attempt fetch failed");
                JobRetriesResult::failed(ATTEMPT_FETCH_FAILED)
            }
        }
    }
}
