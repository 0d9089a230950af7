//! Job-related API endpoints

use reqwest::Method;
use serde_json::json;
use tracing::debug;

use crate::PlatformClient;
use crate::error::Result;
use gantry_core::domain::config::{JobConfig, SshInfo};
use gantry_core::domain::job::JobInfo;

impl PlatformClient {
    // =============================================================================
    // Job Reads
    // =============================================================================

    /// Get the full status of a job
    ///
    /// # Arguments
    /// * `user` - Owner of the job
    /// * `job` - Job name
    pub async fn get_job(&self, user: &str, job: &str) -> Result<JobInfo> {
        let url = format!(
            "{}/api/v2/jobs/{}",
            self.server_url(),
            Self::job_segment(user, job)
        );
        let response = self.request(Method::GET, &url).send().await?;

        self.handle_response(response).await
    }

    /// Get the configuration a job was submitted with
    ///
    /// Fails with `NotFound` when the backend reports `NoJobConfigError`.
    pub async fn get_job_config(&self, user: &str, job: &str) -> Result<JobConfig> {
        let url = format!(
            "{}/api/v2/jobs/{}/config",
            self.server_url(),
            Self::job_segment(user, job)
        );
        let response = self.request(Method::GET, &url).send().await?;

        self.handle_response(response).await
    }

    /// Get SSH access info for a job's containers
    ///
    /// Fails with `NotFound` when the backend reports `NoJobSshInfoError`.
    pub async fn get_ssh_info(&self, user: &str, job: &str) -> Result<SshInfo> {
        let url = format!(
            "{}/api/v2/jobs/{}/ssh",
            self.server_url(),
            Self::job_segment(user, job)
        );
        let response = self.request(Method::GET, &url).send().await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Job Commands
    // =============================================================================

    /// Stop a running job
    ///
    /// The only state-changing call in this client; a one-shot execution
    /// type update with no retry logic.
    pub async fn stop_job(&self, user: &str, job: &str) -> Result<()> {
        let url = format!(
            "{}/api/v2/jobs/{}/executionType",
            self.server_url(),
            Self::job_segment(user, job)
        );
        debug!(user, job, "requesting job stop");
        let response = self
            .request(Method::PUT, &url)
            .json(&json!({ "value": "STOP" }))
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
