use std::process::ExitCode;

use lait_core::report::RunReport;

pub mod health;
pub mod seed;
pub mod smoke;

/// Exit 0 only when every recorded check passed; this is the CI gate.
pub fn exit_code(report: &RunReport) -> ExitCode {
    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ExitCode has no PartialEq; compare through Debug.
    fn code_str(report: &RunReport) -> String {
        format!("{:?}", exit_code(report))
    }

    #[test]
    fn passing_report_exits_zero() {
        let mut report = RunReport::new();
        report.record_pass("health");
        assert_eq!(code_str(&report), format!("{:?}", ExitCode::SUCCESS));
    }

    #[test]
    fn failing_report_exits_nonzero() {
        let mut report = RunReport::new();
        report.record_pass("health");
        report.record_fail("auth", "rejected");
        assert_eq!(code_str(&report), format!("{:?}", ExitCode::FAILURE));
    }

    #[test]
    fn empty_report_exits_nonzero() {
        assert_eq!(code_str(&RunReport::new()), format!("{:?}", ExitCode::FAILURE));
    }
}
