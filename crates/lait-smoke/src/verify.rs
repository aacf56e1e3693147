//! Verification checks against the invoice list and dashboard metrics.
//!
//! Every assertion runs regardless of earlier verification failures --
//! distinct from the health probe's fail-fast. A later check stays
//! informative even when an earlier one fails.

use lait_core::entities::AuthSession;
use lait_core::report::RunReport;

use crate::api::InvoiceApi;

/// Run the fixed verification sequence, recording each outcome
/// independently.
pub async fn run_verification<A: InvoiceApi>(
    api: &A,
    session: &AuthSession,
    report: &mut RunReport,
) {
    match api.list_invoices(session).await {
        Ok(invoices) if invoices.is_empty() => {
            report.record_fail("invoices.non_empty", "invoice list is empty");
        }
        Ok(invoices) => {
            report.record_pass_with("invoices.non_empty", format!("{} invoices", invoices.len()));
        }
        Err(err) => {
            report.record_fail("invoices.non_empty", err.describe());
        }
    }

    match api.dashboard_metrics(session).await {
        Ok(metrics) => {
            if metrics.invoices_count >= 1 {
                report.record_pass_with(
                    "metrics.invoices_count",
                    format!("invoices_count={}", metrics.invoices_count),
                );
            } else {
                report.record_fail("metrics.invoices_count", "invoices_count is 0");
            }

            if metrics.total_spend > 0.0 {
                report.record_pass_with(
                    "metrics.total_spend",
                    format!("total_spend={:.2}", metrics.total_spend),
                );
            } else {
                report.record_fail(
                    "metrics.total_spend",
                    format!("total_spend={:.2} is not positive", metrics.total_spend),
                );
            }
        }
        Err(err) => {
            // Fetch failure fails both metric predicates; the list check
            // above has already run either way.
            let detail = err.describe();
            report.record_fail("metrics.invoices_count", detail.clone());
            report.record_fail("metrics.total_spend", detail);
        }
    }
}
