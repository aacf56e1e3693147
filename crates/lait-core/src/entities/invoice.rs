use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One billed line on a sample invoice.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LineItem {
    pub description: String,
    pub hours: f64,
    pub rate: f64,
    pub amount: f64,
}

/// A sample legal invoice from the static fixture. Immutable during a run;
/// the upload driver renders it to flat text before submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SampleInvoice {
    /// Billing law firm.
    pub vendor: String,
    /// Client the work was billed to.
    pub client: String,
    /// Matter category (e.g. "M&A Advisory").
    pub matter: String,
    pub line_items: Vec<LineItem>,
}

impl SampleInvoice {
    /// Sum of all line amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.line_items.iter().map(|line| line.amount).sum()
    }

    /// Number of billed lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_items.len()
    }
}
