//! Client configuration
//!
//! Everything that used to be ambient page state (REST server URI, session
//! token, deployment log format, Grafana URI) is an explicit field here and
//! threaded into every call through the client.

use gantry_core::domain::log::LogFormat;

/// Configuration for a [`crate::PlatformClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST server base URL (e.g. "http://gantry.example.com/rest-server")
    pub server_url: String,

    /// Bearer token for authenticated endpoints, if a session exists
    pub token: Option<String>,

    /// Log format served by this deployment's log endpoint
    pub log_format: LogFormat,

    /// Grafana base URL used to build job metrics links
    pub grafana_url: String,
}

impl ClientConfig {
    /// Creates a configuration with defaults for everything but the server URL
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into();
        Self {
            server_url,
            token: None,
            log_format: LogFormat::Yarn,
            grafana_url: "http://localhost:3000".to_string(),
        }
    }

    /// Sets the bearer token used for authenticated endpoints
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the deployment's log format
    pub fn with_log_format(mut self, log_format: LogFormat) -> Self {
        self.log_format = log_format;
        self
    }

    /// Sets the Grafana base URL for metrics links
    pub fn with_grafana_url(mut self, grafana_url: impl Into<String>) -> Self {
        self.grafana_url = grafana_url.into();
        self
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - GANTRY_SERVER_URL (required)
    /// - GANTRY_TOKEN (optional)
    /// - GANTRY_LOG_FORMAT (optional, "yarn" or "log-manager", default: "yarn")
    /// - GANTRY_GRAFANA_URL (optional, default: "http://localhost:3000")
    pub fn from_env() -> anyhow::Result<Self> {
        let server_url = std::env::var("GANTRY_SERVER_URL")
            .map_err(|_| anyhow::anyhow!("GANTRY_SERVER_URL environment variable not set"))?;

        let mut config = Self::new(server_url);

        if let Ok(token) = std::env::var("GANTRY_TOKEN") {
            config.token = Some(token);
        }

        if let Ok(format) = std::env::var("GANTRY_LOG_FORMAT") {
            config.log_format = format.parse()?;
        }

        if let Ok(grafana_url) = std::env::var("GANTRY_GRAFANA_URL") {
            config.grafana_url = grafana_url;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server_url.is_empty() {
            anyhow::bail!("server_url cannot be empty");
        }

        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            anyhow::bail!("server_url must start with http:// or https://");
        }

        if !self.grafana_url.starts_with("http://") && !self.grafana_url.starts_with("https://") {
            anyhow::bail!("grafana_url must start with http:// or https://");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new("http://localhost:9186");
        assert_eq!(config.log_format, LogFormat::Yarn);
        assert!(config.token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::new("http://localhost:9186")
            .with_token("abc")
            .with_log_format(LogFormat::LogManager)
            .with_grafana_url("http://grafana.example.com");

        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.log_format, LogFormat::LogManager);
        assert_eq!(config.grafana_url, "http://grafana.example.com");
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::new("http://localhost:9186");
        assert!(config.validate().is_ok());

        config.server_url = String::new();
        assert!(config.validate().is_err());

        config.server_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.server_url = "https://gantry.example.com".to_string();
        assert!(config.validate().is_ok());

        config.grafana_url = "grafana".to_string();
        assert!(config.validate().is_err());
    }
}
