//! Flat-text rendering of a sample invoice for multipart upload.
//!
//! The backend's parser expects a header block followed by one
//! pipe-delimited row per billed line and a trailing total row. Rendering
//! is deterministic; the server's `lines_processed` is expected to equal
//! the invoice's line-item count.

use std::fmt::Write as _;

use lait_core::entities::SampleInvoice;

/// Render the upload payload for one invoice.
#[must_use]
pub fn flat_text(invoice: &SampleInvoice) -> String {
    let mut out = String::new();
    out.push_str("INVOICE\n");
    let _ = writeln!(out, "Vendor: {}", invoice.vendor);
    let _ = writeln!(out, "Client: {}", invoice.client);
    let _ = writeln!(out, "Matter: {}", invoice.matter);
    out.push('\n');

    for line in &invoice.line_items {
        let _ = writeln!(
            out,
            "{} | {:.1} | {:.2} | {:.2}",
            line.description, line.hours, line.rate, line.amount
        );
    }

    out.push('\n');
    let _ = writeln!(out, "TOTAL | {:.2}", invoice.total());
    out
}

/// Upload file name for the invoice at `index` (zero-based fixture order).
#[must_use]
pub fn file_name(index: usize) -> String {
    format!("invoice_{:02}.txt", index + 1)
}

#[cfg(test)]
mod tests {
    use lait_core::entities::LineItem;
    use rstest::rstest;

    use super::*;

    fn invoice() -> SampleInvoice {
        SampleInvoice {
            vendor: "Testfirm LLP".to_string(),
            client: "Acme Corp".to_string(),
            matter: "General Counsel".to_string(),
            line_items: vec![
                LineItem {
                    description: "Contract review".to_string(),
                    hours: 2.0,
                    rate: 500.0,
                    amount: 1000.0,
                },
                LineItem {
                    description: "Client call".to_string(),
                    hours: 0.5,
                    rate: 500.0,
                    amount: 250.0,
                },
            ],
        }
    }

    #[test]
    fn header_block_names_the_parties() {
        let text = flat_text(&invoice());
        assert!(text.starts_with("INVOICE\n"));
        assert!(text.contains("Vendor: Testfirm LLP\n"));
        assert!(text.contains("Client: Acme Corp\n"));
        assert!(text.contains("Matter: General Counsel\n"));
    }

    #[test]
    fn one_row_per_line_item() {
        let text = flat_text(&invoice());
        assert!(text.contains("Contract review | 2.0 | 500.00 | 1000.00\n"));
        assert!(text.contains("Client call | 0.5 | 500.00 | 250.00\n"));
    }

    #[test]
    fn total_row_sums_the_lines() {
        let text = flat_text(&invoice());
        assert!(text.ends_with("TOTAL | 1250.00\n"));
    }

    #[test]
    fn empty_invoice_still_renders_header_and_total() {
        let mut inv = invoice();
        inv.line_items.clear();
        let text = flat_text(&inv);
        assert!(text.starts_with("INVOICE\n"));
        assert!(text.ends_with("TOTAL | 0.00\n"));
    }

    #[rstest]
    #[case(0, "invoice_01.txt")]
    #[case(4, "invoice_05.txt")]
    #[case(9, "invoice_10.txt")]
    fn file_names_are_one_based_and_padded(#[case] index: usize, #[case] expected: &str) {
        assert_eq!(file_name(index), expected);
    }
}
