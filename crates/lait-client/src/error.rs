//! API client error types.

use thiserror::Error;

/// Errors that can occur when calling the LAIT API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (unreachable server, timeout, decode failure).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned 409 Conflict. During registration this is the
    /// explicit "account already exists" contract and triggers the login
    /// fallback.
    #[error("conflict: resource already exists")]
    Conflict,

    /// A response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// True when the underlying transport timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_timeout())
    }

    /// True when the server could not be reached at all.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_connect())
    }

    /// Human-readable description distinguishing the connectivity failure
    /// modes the health probe must report distinctly.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Http(err) if err.is_timeout() => format!("request timed out: {err}"),
            Self::Http(err) if err.is_connect() => format!("connection refused: {err}"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_describes_status_and_body() {
        let err = ApiError::Api {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(err.describe(), "API error (503): maintenance");
        assert!(!err.is_timeout());
        assert!(!err.is_connect());
    }

    #[test]
    fn conflict_display_is_stable() {
        assert_eq!(
            ApiError::Conflict.to_string(),
            "conflict: resource already exists"
        );
    }
}
