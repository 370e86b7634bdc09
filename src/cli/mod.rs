//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// filepaths - resolve a file or directory spec into per-test-case file paths
#[derive(Parser, Debug)]
#[command(name = "filepaths", version, about, long_about = None)]
pub struct Cli {
    /// Base directory for relative paths (overrides config file)
    #[arg(short = 'b', long = "base", global = true)]
    pub base: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a path and optional search pattern into file paths
    Resolve(ResolveArgs),

    /// Show whether a path is treated as a file or a directory
    Classify(ClassifyArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// File or directory, absolute or relative to the base directory
    pub path: String,

    /// Wildcard pattern (`*` and `?`) matched against file names in a directory
    pub pattern: Option<String>,

    /// Match the pattern case-sensitively
    #[arg(short = 'c', long, overrides_with = "ignore_case")]
    pub case_sensitive: bool,

    /// Match the pattern case-insensitively (overrides config)
    #[arg(short = 'i', long, overrides_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl ResolveArgs {
    /// Case sensitivity requested on the command line; the last flag given wins.
    pub fn case_sensitive(&self) -> Option<bool> {
        match (self.case_sensitive, self.ignore_case) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the `classify` command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// File or directory, absolute or relative to the base directory
    pub path: String,

    /// Wildcard pattern, reported only for directory targets
    pub pattern: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
