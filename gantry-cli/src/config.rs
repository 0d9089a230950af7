//! CLI configuration
//!
//! Collects the flags and environment into a validated client config.

use anyhow::Result;
use gantry_client::{ClientConfig, PlatformClient};
use gantry_core::domain::log::LogFormat;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    client: ClientConfig,
}

impl Config {
    /// Build and validate the configuration
    pub fn new(
        server_url: String,
        token: Option<String>,
        log_format: &str,
        grafana_url: String,
    ) -> Result<Self> {
        let log_format: LogFormat = log_format.parse()?;

        let mut client = ClientConfig::new(server_url)
            .with_log_format(log_format)
            .with_grafana_url(grafana_url);
        client.token = token;
        client.validate()?;

        Ok(Self { client })
    }

    /// Construct a platform client from this configuration
    pub fn client(&self) -> PlatformClient {
        PlatformClient::new(self.client.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_accepts_known_log_formats() {
        let config = Config::new(
            "http://localhost:9186".to_string(),
            None,
            "log-manager",
            "http://localhost:3000".to_string(),
        );
        assert!(config.is_ok());
    }

    #[test]
    fn test_config_rejects_unknown_log_format() {
        let config = Config::new(
            "http://localhost:9186".to_string(),
            None,
            "journald",
            "http://localhost:3000".to_string(),
        );
        assert!(config.is_err());
    }

    #[test]
    fn test_config_rejects_bad_server_url() {
        let config = Config::new(
            "localhost:9186".to_string(),
            None,
            "yarn",
            "http://localhost:3000".to_string(),
        );
        assert!(config.is_err());
    }
}
