use clap::ValueEnum;

/// How the JSON result is laid out on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Indented, for reading.
    Json,
    /// One line, for piping into `jq` or a release script.
    Raw,
}

/// Flags shared by every subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}
