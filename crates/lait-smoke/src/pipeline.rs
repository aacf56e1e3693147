//! Pipeline composition: health → auth → uploads → verification.
//!
//! Control flows strictly top to bottom. Connectivity and authentication
//! failures are fatal and end the run with whatever has been recorded;
//! upload and assertion failures are accumulated and surfaced in the
//! final report.

use lait_core::entities::{AuthSession, SampleInvoice, UploadResult};
use lait_core::report::RunReport;

use crate::api::InvoiceApi;
use crate::{auth, upload, verify};

/// How much of the pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Health probe only.
    Health,
    /// Health + auth + uploads (the seeder).
    Seed,
    /// The full pipeline including verification checks.
    Smoke,
}

/// Run the pipeline in `mode` against `api`, seeding `invoices` with the
/// given demo credentials. Returns the report; the caller maps
/// `all_passed()` to the process exit code.
pub async fn run<A: InvoiceApi>(
    api: &A,
    mode: Mode,
    email: &str,
    password: &str,
    invoices: &[SampleInvoice],
    mut on_upload: impl FnMut(&UploadResult),
) -> RunReport {
    let mut report = RunReport::new();

    // Health probe: fail-fast, no retry. Nothing else runs on failure.
    match api.health().await {
        Ok(health) => {
            tracing::debug!(status = %health.status, "backend is up");
            report.record_pass("health");
        }
        Err(err) => {
            report.record_fail("health", err.describe());
            return report;
        }
    }
    if mode == Mode::Health {
        return report;
    }

    // Auth: registration with login fallback. Failure of both is fatal.
    let session: AuthSession = match auth::ensure_session(api, email, password).await {
        Ok(session) => {
            report.record_pass_with("auth", format!("session for {}", session.email));
            session
        }
        Err(err) => {
            report.record_fail("auth", err.describe());
            return report;
        }
    };

    upload::run_uploads(api, &session, invoices, &mut report, &mut on_upload).await;

    if mode == Mode::Smoke {
        verify::run_verification(api, &session, &mut report).await;
    }

    report
}
