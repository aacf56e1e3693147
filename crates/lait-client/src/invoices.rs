//! Invoice endpoints: multipart upload and listing.

use lait_core::entities::{AuthSession, SampleInvoice};
use serde::Deserialize;
use serde_json::Value;

use crate::{ApiClient, error::ApiError, http::check_response};

/// Parsed body of a successful `POST /api/invoices/upload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Server-assigned invoice id, normalized to a string (the wire value
    /// may be a JSON string or number).
    pub invoice_id: String,
    /// Number of billed lines the server extracted from the payload.
    pub lines_processed: u32,
}

/// One entry of `GET /api/invoices`. Fields are lenient: the harness only
/// needs non-emptiness and id sampling, not the full invoice shape.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceSummary {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

impl ApiClient {
    /// Submit one rendered invoice via `POST /api/invoices/upload`.
    ///
    /// Multipart form: text fields `vendor`, `client`, `matter`, plus a
    /// `file` part carrying the flat-text payload, authorized with the
    /// session's bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a
    /// response body missing `invoice_id`/`lines_processed`.
    pub async fn upload_invoice(
        &self,
        session: &AuthSession,
        invoice: &SampleInvoice,
        payload: String,
        file_name: &str,
    ) -> Result<UploadReceipt, ApiError> {
        tracing::debug!(vendor = %invoice.vendor, file_name, "uploading invoice");

        let part = reqwest::multipart::Part::text(payload)
            .file_name(file_name.to_string())
            .mime_str("text/plain")?;
        let form = reqwest::multipart::Form::new()
            .text("vendor", invoice.vendor.clone())
            .text("client", invoice.client.clone())
            .text("matter", invoice.matter.clone())
            .part("file", part);

        let resp = self
            .http
            .post(self.url("/api/invoices/upload"))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .multipart(form)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body: Value = resp.json().await?;
        parse_upload_receipt(&body)
    }

    /// Fetch the invoice list via `GET /api/invoices`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not a JSON
    /// array.
    pub async fn list_invoices(
        &self,
        session: &AuthSession,
    ) -> Result<Vec<InvoiceSummary>, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/invoices"))
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}

/// Extract `invoice_id` and `lines_processed` from an upload response.
///
/// `invoice_id` is accepted as a JSON string or number and normalized to a
/// string; anything else is a parse error, never a silent coercion.
fn parse_upload_receipt(body: &Value) -> Result<UploadReceipt, ApiError> {
    let invoice_id = match &body["invoice_id"] {
        Value::String(id) => id.clone(),
        Value::Number(id) => id.to_string(),
        _ => {
            return Err(ApiError::Parse(
                "missing or ill-typed invoice_id in upload response".into(),
            ));
        }
    };
    let lines_processed = body["lines_processed"]
        .as_u64()
        .and_then(|count| u32::try_from(count).ok())
        .ok_or_else(|| {
            ApiError::Parse("missing or ill-typed lines_processed in upload response".into())
        })?;

    Ok(UploadReceipt {
        invoice_id,
        lines_processed,
    })
}
