//! Dashboard metrics endpoint client.

use lait_core::entities::AuthSession;
use serde::Deserialize;

use crate::{ApiClient, error::ApiError, http::check_response};

/// Body of `GET /api/dashboard/metrics`. The endpoint returns more fields;
/// the harness asserts on these two.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardMetrics {
    pub invoices_count: u64,
    pub total_spend: f64,
}

impl ApiClient {
    /// Fetch dashboard metrics for the verification checks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a
    /// body missing `invoices_count`/`total_spend`.
    pub async fn dashboard_metrics(
        &self,
        session: &AuthSession,
    ) -> Result<DashboardMetrics, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/dashboard/metrics"))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}
