//! The API seam the pipeline runs against.
//!
//! Mirrors the client operations the pipeline needs so stages can be unit
//! tested against an in-memory fake with zero network. [`ApiClient`] is
//! the production implementation.

use lait_client::{ApiClient, ApiError, DashboardMetrics, HealthStatus, InvoiceSummary, UploadReceipt};
use lait_core::entities::{AuthSession, SampleInvoice};

/// Operations the pipeline performs against the LAIT backend.
pub trait InvoiceApi {
    async fn health(&self) -> Result<HealthStatus, ApiError>;

    async fn register(&self, email: &str, password: &str) -> Result<String, ApiError>;

    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;

    async fn upload_invoice(
        &self,
        session: &AuthSession,
        invoice: &SampleInvoice,
        payload: String,
        file_name: &str,
    ) -> Result<UploadReceipt, ApiError>;

    async fn list_invoices(&self, session: &AuthSession) -> Result<Vec<InvoiceSummary>, ApiError>;

    async fn dashboard_metrics(
        &self,
        session: &AuthSession,
    ) -> Result<DashboardMetrics, ApiError>;
}

impl InvoiceApi for ApiClient {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Self::health(self).await
    }

    async fn register(&self, email: &str, password: &str) -> Result<String, ApiError> {
        Self::register(self, email, password).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        Self::login(self, email, password).await
    }

    async fn upload_invoice(
        &self,
        session: &AuthSession,
        invoice: &SampleInvoice,
        payload: String,
        file_name: &str,
    ) -> Result<UploadReceipt, ApiError> {
        Self::upload_invoice(self, session, invoice, payload, file_name).await
    }

    async fn list_invoices(&self, session: &AuthSession) -> Result<Vec<InvoiceSummary>, ApiError> {
        Self::list_invoices(self, session).await
    }

    async fn dashboard_metrics(
        &self,
        session: &AuthSession,
    ) -> Result<DashboardMetrics, ApiError> {
        Self::dashboard_metrics(self, session).await
    }
}
