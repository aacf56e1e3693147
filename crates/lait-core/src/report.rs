//! Check outcomes and the run report accumulator.
//!
//! Every stage of the pipeline records named pass/fail outcomes here; the
//! CLI maps `all_passed()` to the process exit code. The report lives for
//! one run only -- there is no cross-run state.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::UploadResult;

/// One recorded pass/fail outcome.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Short check name (e.g. `health`, `upload[3]`, `metrics.total_spend`).
    pub name: String,
    pub passed: bool,
    /// Human-readable detail, mostly set on failures.
    pub detail: Option<String>,
}

/// Ordered accumulation of check outcomes and upload results for one run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub checks: Vec<CheckOutcome>,
    pub uploads: Vec<UploadResult>,
}

impl RunReport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            checks: Vec::new(),
            uploads: Vec::new(),
        }
    }

    pub fn record_pass(&mut self, name: impl Into<String>) {
        self.checks.push(CheckOutcome {
            name: name.into(),
            passed: true,
            detail: None,
        });
    }

    pub fn record_pass_with(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        self.checks.push(CheckOutcome {
            name: name.into(),
            passed: true,
            detail: Some(detail.into()),
        });
    }

    pub fn record_fail(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        self.checks.push(CheckOutcome {
            name: name.into(),
            passed: false,
            detail: Some(detail.into()),
        });
    }

    pub fn push_upload(&mut self, result: UploadResult) {
        self.uploads.push(result);
    }

    /// Number of passed checks.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|check| check.passed).count()
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }

    /// True when at least one check ran and none failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        !self.checks.is_empty() && self.failed() == 0
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
