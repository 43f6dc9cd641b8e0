use std::process::ExitCode;

use anyhow::Context;
use ria_config::{ConfigError, RiaConfig};

use crate::cli::{Commands, GlobalFlags};

pub mod analyze;
pub mod parse_link;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: Result<RiaConfig, ConfigError>,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Analyze(args) => {
            let config = config.context("failed to load configuration")?;
            analyze::handle(&args, &config, flags).await
        }
        Commands::ParseLink(args) => parse_link::handle(&args, flags),
    }
}
