use std::process::ExitCode;

use clap::Parser;
use ria_config::RiaConfig;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("ria error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();

    // A broken config only matters to commands that talk to DevOps.
    let config = RiaConfig::load_with_dotenv();
    let configured = config
        .as_ref()
        .map_or("warn", |config| config.general.log_filter());
    let flags = cli.global_flags();
    init_tracing(log_level(&flags, configured))?;

    commands::dispatch(cli.command, config, &flags).await
}

/// `--quiet` beats `--verbose`, and both beat the configured level.
fn log_level<'a>(flags: &cli::GlobalFlags, configured: &'a str) -> &'a str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        configured
    }
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RIA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
