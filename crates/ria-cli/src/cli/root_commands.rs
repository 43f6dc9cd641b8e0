use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Find the repositories a set of work items requires releasing.
    Analyze(AnalyzeArgs),
    /// Decode a single `vstfs:///Git/...` artifact link.
    ParseLink(ParseLinkArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Comma-separated work item IDs, e.g. 123,456,789
    #[arg(long)]
    pub ids: Option<String>,

    /// WIQL query selecting the work items (overrides --ids)
    #[arg(long)]
    pub wiql: Option<String>,

    /// Time budget for the whole analysis, in seconds
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct ParseLinkArgs {
    /// Artifact link URL as stored on the work item relation
    pub url: String,
}
