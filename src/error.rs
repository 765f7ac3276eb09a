//! Error types for the login flow.

use thiserror::Error;

/// Errors from the CLI login flow.
///
/// HTTP-level failures are fatal and carry the status code plus the raw
/// response body, so a rejected key can be told apart from an outage.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Session initiation failed with status {status}: {body}")]
    Initiation { status: u16, body: String },

    #[error("Session poll failed with status {status}: {body}")]
    Poll { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

/// Result alias for login flow operations.
pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initiation_display_carries_status_and_body() {
        let err = AuthError::Initiation {
            status: 500,
            body: "internal error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"), "got: {message}");
        assert!(message.contains("internal error"), "got: {message}");
    }

    #[test]
    fn poll_display_carries_status_and_body() {
        let err = AuthError::Poll {
            status: 403,
            body: "forbidden".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("403"), "got: {message}");
        assert!(message.contains("forbidden"), "got: {message}");
    }

    #[test]
    fn configuration_display_names_the_field() {
        let err = AuthError::Configuration("missing required field: project_id".to_string());
        assert!(err.to_string().contains("project_id"));
    }
}
