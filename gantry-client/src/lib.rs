//! Gantry HTTP Client
//!
//! A type-safe client for the Gantry job platform's REST server. It fetches
//! job status, attempt history, task status and container logs, normalizes
//! the backend's heterogeneous response shapes into the `gantry-core` domain
//! model, and classifies failures into a small closed error taxonomy.
//!
//! # Example
//!
//! ```no_run
//! use gantry_client::{ClientConfig, PlatformClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::new("http://localhost:9186").with_token("token");
//!     let client = PlatformClient::new(config);
//!
//!     let job = client.get_job("alice", "mnist-train").await?;
//!     println!("{} is {}", job.name, job.job_status.state);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod urls;

mod attempts;
mod config;
mod jobs;
mod logs;
mod tasks;

// Re-export commonly used types
pub use attempts::JobRetriesResult;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use gantry_core::domain::log::{ContainerLog, LogFormat};

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// HTTP client for the Gantry REST server
///
/// Methods are grouped per concern:
/// - Job reads and the stop command (`jobs.rs`)
/// - Attempt history and retry reconciliation (`attempts.rs`)
/// - Task status (`tasks.rs`)
/// - Container log retrieval and normalization (`logs.rs`)
///
/// Every method is an independent, request-scoped call; the client holds no
/// mutable state beyond its configuration.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    config: ClientConfig,
    client: Client,
}

impl PlatformClient {
    /// Create a new platform client
    ///
    /// # Arguments
    /// * `config` - Client configuration (server URL, token, log format)
    pub fn new(mut config: ClientConfig) -> Self {
        config.server_url = config.server_url.trim_end_matches('/').to_string();
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create a new platform client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(mut config: ClientConfig, client: Client) -> Self {
        config.server_url = config.server_url.trim_end_matches('/').to_string();
        Self { config, client }
    }

    /// Get the REST server base URL
    pub fn server_url(&self) -> &str {
        &self.config.server_url
    }

    /// Get the configured log format
    pub fn log_format(&self) -> LogFormat {
        self.config.log_format
    }

    /// URL path segment identifying a job, `{user}~{job}`
    pub(crate) fn job_segment(user: &str, job: &str) -> String {
        format!("{}~{}", user, job)
    }

    /// Build a request with the bearer token attached when a session exists
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut req = self.client.request(method, url);
        if let Some(token) = &self.config.token {
            req = req.bearer_auth(token);
        }
        req
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success responses are translated into a typed [`ClientError`]
    /// exactly once, here; callers never see a raw backend error shape.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error::classify(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Generic(format!("failed to parse JSON response: {}", e)))
    }

    /// Handle an API response with no interesting body (healthz, commands)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error::classify(status, &body));
        }

        Ok(())
    }
}
