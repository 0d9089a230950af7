//! Task status endpoints

use reqwest::Method;

use crate::PlatformClient;
use crate::error::Result;
use gantry_core::domain::task::TaskStatus;

impl PlatformClient {
    /// Get the status of one task, including its attempt history
    ///
    /// # Arguments
    /// * `user` - Owner of the job
    /// * `job` - Job name
    /// * `job_attempt_index` - Which job attempt the task belongs to
    /// * `task_role` - Role name within the job (e.g. "worker")
    /// * `task_index` - Index of the task within the role
    pub async fn get_task_status(
        &self,
        user: &str,
        job: &str,
        job_attempt_index: u32,
        task_role: &str,
        task_index: u32,
    ) -> Result<TaskStatus> {
        let url = format!(
            "{}/api/v2/jobs/{}/attempts/{}/taskRoles/{}/taskIndex/{}/attempts",
            self.server_url(),
            Self::job_segment(user, job),
            job_attempt_index,
            task_role,
            task_index
        );
        let response = self.request(Method::GET, &url).send().await?;

        self.handle_response(response).await
    }
}
