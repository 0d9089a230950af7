//! Container log domain types

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Normalized container log
///
/// Invariant: `full_log_link` is always an absolute URL by the time it
/// leaves the client, regardless of whether the source log format supplied
/// a relative or absolute link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerLog {
    pub text: Option<String>,
    pub full_log_link: String,
}

/// Backend log format, selected by deployment configuration
///
/// Closed set: every recognized configuration value maps to a variant, so
/// the log path can dispatch exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// Resource-manager web UI pages with the log embedded in HTML
    Yarn,
    /// Dedicated log service returning plain text
    LogManager,
}

/// Error returned when a configuration string names no known log format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogFormatError(pub String);

impl std::fmt::Display for ParseLogFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown log format {:?}, expected \"yarn\" or \"log-manager\"",
            self.0
        )
    }
}

impl std::error::Error for ParseLogFormatError {}

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yarn" => Ok(Self::Yarn),
            "log-manager" => Ok(Self::LogManager),
            other => Err(ParseLogFormatError(other.to_string())),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yarn => f.write_str("yarn"),
            Self::LogManager => f.write_str("log-manager"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parses_config_values() {
        assert_eq!("yarn".parse::<LogFormat>().unwrap(), LogFormat::Yarn);
        assert_eq!(
            "log-manager".parse::<LogFormat>().unwrap(),
            LogFormat::LogManager
        );
    }

    #[test]
    fn test_log_format_rejects_unknown_values() {
        let err = "syslog".parse::<LogFormat>().unwrap_err();
        assert_eq!(err, ParseLogFormatError("syslog".to_string()));
    }

    #[test]
    fn test_log_format_display_round_trips() {
        for format in [LogFormat::Yarn, LogFormat::LogManager] {
            assert_eq!(format.to_string().parse::<LogFormat>().unwrap(), format);
        }
    }
}
