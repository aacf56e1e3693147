use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of submitting one sample invoice.
///
/// An explicit tagged variant rather than exception control flow, so the
/// upload driver can accumulate per-item results and keep going.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadOutcome {
    /// The server accepted the invoice.
    Accepted {
        /// Server-assigned invoice identifier.
        invoice_id: String,
        /// Number of billed lines the server extracted from the payload.
        lines_processed: u32,
    },
    /// The upload failed; the batch continues with the next invoice.
    Rejected { reason: String },
}

/// Per-invoice record appended by the upload driver, in fixture order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UploadResult {
    /// Position of the invoice in the fixture.
    pub index: usize,
    pub vendor: String,
    pub outcome: UploadOutcome,
}

impl UploadResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self.outcome, UploadOutcome::Accepted { .. })
    }

    /// Server-assigned id, if the upload was accepted.
    #[must_use]
    pub fn invoice_id(&self) -> Option<&str> {
        match &self.outcome {
            UploadOutcome::Accepted { invoice_id, .. } => Some(invoice_id),
            UploadOutcome::Rejected { .. } => None,
        }
    }
}
