use std::process::ExitCode;

use ria_core::GitArtifactReference;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ParseLinkArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ParseLinkResponse {
    Parsed(GitArtifactReference),
    Rejected { error: String },
}

fn parse(url: &str) -> ParseLinkResponse {
    GitArtifactReference::parse(url).map_or_else(
        || ParseLinkResponse::Rejected {
            error: format!("not a git artifact link: {url}"),
        },
        ParseLinkResponse::Parsed,
    )
}

/// Handle `ria parse-link`. Offline; works without a usable configuration.
pub fn handle(args: &ParseLinkArgs, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let response = parse(&args.url);
    output(&response, flags.format)?;
    Ok(match response {
        ParseLinkResponse::Parsed(_) => ExitCode::SUCCESS,
        ParseLinkResponse::Rejected { .. } => ExitCode::FAILURE,
    })
}
