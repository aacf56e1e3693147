//! # lait-client
//!
//! Typed HTTP client for the LAIT REST API.
//!
//! Covers the endpoints the harness exercises:
//! - `GET /api/health` -- backend liveness
//! - `POST /api/auth/register`, `POST /api/auth/login` -- demo session tokens
//! - `POST /api/invoices/upload` -- multipart invoice submission
//! - `GET /api/invoices` -- invoice list
//! - `GET /api/dashboard/metrics` -- spend metrics
//!
//! All calls are sequential and bounded by the configured timeout; there
//! are no retries. The conflict fallback ("already registered → login")
//! lives in `lait-smoke`, on top of the [`ApiClient::register`] /
//! [`ApiClient::login`] primitives.

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod invoices;

mod error;
mod http;

pub use dashboard::DashboardMetrics;
pub use error::ApiError;
pub use health::HealthStatus;
pub use invoices::{InvoiceSummary, UploadReceipt};

use lait_config::ServerConfig;

/// HTTP client for the LAIT backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client bound to the configured server.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(server: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("lait-harness/0.1")
                .timeout(std::time::Duration::from_secs(server.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: server.normalized_base_url().to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let client = ApiClient::new(&ServerConfig::default());
        assert_eq!(
            client.url("/api/health"),
            "http://localhost:5003/api/health"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_does_not_double() {
        let server = ServerConfig {
            base_url: "http://lait.example.com/".into(),
            ..Default::default()
        };
        let client = ApiClient::new(&server);
        assert_eq!(
            client.url("/api/invoices"),
            "http://lait.example.com/api/invoices"
        );
    }
}
