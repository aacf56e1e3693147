//! Report rendering: human-readable text or machine-readable JSON.

use lait_core::report::RunReport;

use crate::cli::OutputFormat;
use crate::ui;

/// Print the run report in the requested format.
pub fn print_report(report: &RunReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => print!("{}", render_text(report, ui::prefs().color)),
    }
    Ok(())
}

/// Render the text report: one line per check, then the pass/fail summary.
fn render_text(report: &RunReport, color: bool) -> String {
    let mut out = String::new();

    for check in &report.checks {
        let marker = if check.passed {
            paint("32", "PASS", color)
        } else {
            paint("31", "FAIL", color)
        };
        match &check.detail {
            Some(detail) => {
                out.push_str(&format!("  [{marker}] {:<24} {detail}\n", check.name));
            }
            None => out.push_str(&format!("  [{marker}] {}\n", check.name)),
        }
    }

    out.push('\n');
    let summary = format!("{} passed, {} failed", report.passed(), report.failed());
    let code = if report.all_passed() { "32" } else { "31" };
    out.push_str(&paint(code, &summary, color));
    out.push('\n');
    out
}

fn paint(code: &str, value: &str, enabled: bool) -> String {
    if enabled {
        format!("\u{1b}[{code}m{value}\u{1b}[0m")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn report() -> RunReport {
        let mut report = RunReport::new();
        report.record_pass("health");
        report.record_fail("upload[3]", "Cooley LLP: server error (500)");
        report
    }

    #[test]
    fn text_report_lists_checks_and_summary() {
        let out = render_text(&report(), false);
        assert!(out.contains("[PASS] health"));
        assert!(out.contains("[FAIL] upload[3]"));
        assert!(out.contains("Cooley LLP: server error (500)"));
        assert!(out.ends_with("1 passed, 1 failed\n"));
    }

    #[test]
    fn colored_report_wraps_markers_in_ansi() {
        let out = render_text(&report(), true);
        assert!(out.contains("\u{1b}[32mPASS\u{1b}[0m"));
        assert!(out.contains("\u{1b}[31mFAIL\u{1b}[0m"));
    }

    #[test]
    fn json_report_is_the_serialized_run_report() {
        let report = report();
        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
