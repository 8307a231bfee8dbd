//! Application error types.
//!
//! Errors are serializable so page controllers and the CLI can hand them to a
//! frontend as structured JSON. For display purposes every variant collapses to
//! a single human-readable string.

use serde::Serialize;
use thiserror::Error;

/// Application-level errors returned by the client, session layer and pages.
///
/// All variants serialize to a structured JSON object for frontend consumption.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    /// The backend answered with a non-success status.
    ///
    /// `message` is the raw response body, or a fallback string when the
    /// body was empty. Display prints nothing but the message.
    #[error("{message}")]
    Api {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
        #[serde(skip_serializing_if = "Option::is_none")]
        endpoint: Option<String>,
    },

    /// Network request failed before a response was received.
    #[error("Network error: {message}")]
    Network { message: String },

    /// No access token is stored for the current session.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Session storage operation failed.
    #[error("Session storage error: {message}")]
    SessionStorage { message: String },

    /// Invalid input provided.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<String>,
    },

    /// Internal application error.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create an API error without status metadata.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            status_code: None,
            endpoint: None,
        }
    }

    /// Create an API error with status code and endpoint.
    pub fn api_full(message: impl Into<String>, status_code: u16, endpoint: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            status_code: Some(status_code),
            endpoint: Some(endpoint.into()),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a session storage error.
    pub fn session_storage(message: impl Into<String>) -> Self {
        Self::SessionStorage {
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    /// Create an invalid input error with field name.
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status of an API error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// Check if this error means the user has no session.
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }
}

// Conversions from common error types

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network("Request timed out")
        } else if err.is_connect() {
            Self::network("Failed to connect to server")
        } else if err.is_builder() {
            Self::invalid_input(format!("Invalid request: {}", err))
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_raw_message() {
        let err = AppError::api_full(r#"{"detail":"Forbidden"}"#, 403, "/jobs/");
        assert_eq!(err.to_string(), r#"{"detail":"Forbidden"}"#);
        assert_eq!(err.status_code(), Some(403));
    }

    #[test]
    fn test_error_serialization() {
        let err = AppError::api_full("Not Found", 404, "/applications/9/");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"type\":\"Api\""));
        assert!(json.contains("\"status_code\":404"));
        assert!(json.contains("/applications/9/"));
    }

    #[test]
    fn test_optional_fields_not_serialized() {
        let err = AppError::invalid_input("bad value");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("field"));
    }

    #[test]
    fn test_not_authenticated() {
        let err = AppError::NotAuthenticated;
        assert!(err.is_not_authenticated());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.to_string(), "Not authenticated");
    }
}
