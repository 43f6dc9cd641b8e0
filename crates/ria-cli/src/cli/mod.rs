use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ria` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ria",
    version,
    about = "Release impact analyzer - which repositories do these work items touch"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json (pretty) or raw (single line)
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Flags handed to every command handler.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
