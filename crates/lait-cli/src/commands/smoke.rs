use std::process::ExitCode;

use lait_client::ApiClient;
use lait_config::LaitConfig;
use lait_smoke::Mode;

use crate::cli::GlobalFlags;
use crate::{output, progress};

/// Handle `lait smoke`: the full pipeline with verification checks.
pub async fn handle(flags: &GlobalFlags, config: &LaitConfig) -> anyhow::Result<ExitCode> {
    let invoices = lait_fixtures::sample_invoices();
    let client = ApiClient::new(&config.server);

    tracing::info!(
        base_url = %config.server.base_url,
        invoices = invoices.len(),
        "starting smoke run"
    );

    let bar = progress::Progress::bar(invoices.len() as u64, "seeding fixture invoices");
    let report = lait_smoke::run(
        &client,
        Mode::Smoke,
        &config.demo.email,
        &config.demo.password,
        &invoices,
        |_| bar.inc(1),
    )
    .await;
    bar.finish_clear();

    output::print_report(&report, flags.format)?;
    Ok(super::exit_code(&report))
}
