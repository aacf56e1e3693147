//! Health endpoint client.

use serde::Deserialize;

use crate::{ApiClient, error::ApiError, http::check_response};

/// Body returned by `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Reported status string (commonly `"ok"` or `"healthy"`).
    #[serde(default)]
    pub status: String,
}

impl ApiClient {
    /// Probe `GET /api/health`.
    ///
    /// Success is HTTP 200 with a JSON body. The caller distinguishes
    /// connection-refused, timeout, and non-200 via [`ApiError`] helpers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a
    /// non-JSON body.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let resp = self.http.get(self.url("/api/health")).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}
