use std::process::ExitCode;

use lait_client::ApiClient;
use lait_config::LaitConfig;
use lait_smoke::Mode;

use crate::cli::GlobalFlags;
use crate::{output, progress};

/// Handle `lait health`: probe the backend and report.
pub async fn handle(flags: &GlobalFlags, config: &LaitConfig) -> anyhow::Result<ExitCode> {
    let client = ApiClient::new(&config.server);

    let spinner = progress::Progress::spinner("probing backend health");
    let report = lait_smoke::run(
        &client,
        Mode::Health,
        &config.demo.email,
        &config.demo.password,
        &[],
        |_| {},
    )
    .await;
    spinner.finish_clear();

    output::print_report(&report, flags.format)?;
    Ok(super::exit_code(&report))
}
