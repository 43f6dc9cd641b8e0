use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use ria_analyzer::ReleaseAnalyzer;
use ria_config::RiaConfig;
use ria_devops::DevOpsClient;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::output::output;

/// Handle `ria analyze`.
///
/// The analysis outcome is always printed. A `{"error": ...}` outcome exits
/// with status 1; configuration problems surface as CLI errors instead.
pub async fn handle(
    args: &AnalyzeArgs,
    config: &RiaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    config
        .devops
        .validate()
        .context("azure devops connection is not usable")?;

    let client = DevOpsClient::new(&config.devops).context("failed to build devops client")?;
    tracing::debug!(project_url = %config.devops.project_url(), "analyzing release");

    let outcome = ReleaseAnalyzer::new(Arc::new(client))
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .analyze_release(args.ids.as_deref(), args.wiql.as_deref())
        .await;

    output(&outcome, flags.format)?;

    Ok(if outcome.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
