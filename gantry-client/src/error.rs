//! Error types for the Gantry client
//!
//! The backend reports failures as `{ code, message }` JSON payloads.
//! [`classify`] translates those exactly once, at the response-handling
//! boundary, into a small closed taxonomy; nothing downstream ever sees a
//! raw backend error shape. Classification is pure: the `Unauthorized`
//! variant carries the message and it is the caller's decision to clear
//! the session in response.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Fixed user-facing message for every failure on the log path
pub const LOG_UNAVAILABLE: &str = "Log not available";

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Gantry client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before the backend could answer
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Backend rejected the session token
    #[error("{0}")]
    Unauthorized(String),

    /// Requested entity does not exist on the backend
    #[error("{0}")]
    NotFound(String),

    /// Any other backend-reported failure
    #[error("{0}")]
    Generic(String),
}

/// Structured error payload returned by the backend
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ClientError {
    /// The fixed failure used everywhere on the container-log path
    pub fn log_unavailable() -> Self {
        Self::Generic(LOG_UNAVAILABLE.to_string())
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error means the session must be re-established
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Translate a non-success backend response into a typed error
///
/// Inspects the structured error code when the body parses as one,
/// otherwise falls back to the HTTP status.
pub(crate) fn classify(status: StatusCode, body: &str) -> ClientError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => match err.code.as_str() {
            "UnauthorizedUserError" => ClientError::Unauthorized(err.message),
            "NoJobConfigError" | "NoJobSshInfoError" => ClientError::NotFound(err.message),
            _ if status == StatusCode::NOT_FOUND => ClientError::NotFound(err.message),
            _ => ClientError::Generic(err.message),
        },
        Err(_) if status == StatusCode::NOT_FOUND => {
            ClientError::NotFound(format!("not found: {}", body))
        }
        Err(_) => ClientError::Generic(format!("API error (status {}): {}", status, body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_no_job_config_is_not_found() {
        let body = r#"{"code":"NoJobConfigError","message":"config of job demo is not found"}"#;
        let err = classify(StatusCode::NOT_FOUND, body);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "config of job demo is not found");
    }

    #[test]
    fn test_classify_unauthorized_carries_message() {
        let body = r#"{"code":"UnauthorizedUserError","message":"token expired"}"#;
        let err = classify(StatusCode::UNAUTHORIZED, body);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "token expired");
    }

    #[test]
    fn test_classify_other_codes_are_generic() {
        let body = r#"{"code":"InternalServerError","message":"boom"}"#;
        let err = classify(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(matches!(err, ClientError::Generic(ref m) if m == "boom"));
    }

    #[test]
    fn test_classify_unstructured_404_is_not_found() {
        let err = classify(StatusCode::NOT_FOUND, "no such page");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_classify_unstructured_body_is_generic() {
        let err = classify(StatusCode::BAD_GATEWAY, "<html>gateway</html>");
        assert!(matches!(err, ClientError::Generic(_)));
    }
}
