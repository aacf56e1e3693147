//! Upload driver: submit every fixture invoice, continue on error.

use lait_core::entities::{AuthSession, SampleInvoice, UploadOutcome, UploadResult};
use lait_core::report::RunReport;

use crate::api::InvoiceApi;

/// Submit `invoices` in fixture order, accumulating one [`UploadResult`]
/// per invoice into the report. A failed upload is recorded and the batch
/// continues -- one bad invoice never aborts the rest.
///
/// An invoice with no line items is rejected locally without a request.
/// `on_item` is invoked after each result lands (progress reporting).
pub async fn run_uploads<A: InvoiceApi>(
    api: &A,
    session: &AuthSession,
    invoices: &[SampleInvoice],
    report: &mut RunReport,
    mut on_item: impl FnMut(&UploadResult),
) {
    for (index, invoice) in invoices.iter().enumerate() {
        let outcome = upload_one(api, session, index, invoice).await;
        let check_name = format!("upload[{index}]");
        match &outcome {
            UploadOutcome::Accepted {
                invoice_id,
                lines_processed,
            } => {
                tracing::info!(index, invoice_id, lines_processed, "invoice accepted");
                report.record_pass_with(
                    check_name,
                    format!("{}: id={invoice_id}, {lines_processed} lines", invoice.vendor),
                );
            }
            UploadOutcome::Rejected { reason } => {
                tracing::warn!(index, vendor = %invoice.vendor, reason, "invoice rejected");
                report.record_fail(check_name, format!("{}: {reason}", invoice.vendor));
            }
        }

        let result = UploadResult {
            index,
            vendor: invoice.vendor.clone(),
            outcome,
        };
        on_item(&result);
        report.push_upload(result);
    }
}

async fn upload_one<A: InvoiceApi>(
    api: &A,
    session: &AuthSession,
    index: usize,
    invoice: &SampleInvoice,
) -> UploadOutcome {
    if invoice.line_items.is_empty() {
        return UploadOutcome::Rejected {
            reason: "no line items".to_string(),
        };
    }

    let payload = lait_fixtures::flat_text(invoice);
    let file_name = lait_fixtures::file_name(index);
    match api
        .upload_invoice(session, invoice, payload, &file_name)
        .await
    {
        Ok(receipt) => UploadOutcome::Accepted {
            invoice_id: receipt.invoice_id,
            lines_processed: receipt.lines_processed,
        },
        Err(err) => UploadOutcome::Rejected {
            reason: err.describe(),
        },
    }
}
