//! filepaths - file paths as parameterized test inputs
//!
//! Resolves a path (a single file, or a directory with an optional `*`/`?`
//! pattern) into an ordered list of absolute file paths, one per test case.

pub mod cli;
pub mod domain;
pub mod infra;
pub mod resolve;

pub use domain::{MatchCase, PathSpec, ResolveError, ResolvedTarget, WildcardPattern};
pub use resolve::{FilePathsData, Resolver, TestCase, file_paths, to_cases};

use anyhow::{Context, Result};
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_classify, handle_completions, handle_resolve},
};
use infra::BaseDir;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let base = match config.base_dir(cli.base.as_ref()) {
        Some(dir) => BaseDir::new(dir),
        None => BaseDir::current_dir().context("failed to read working directory")?,
    };
    log::debug!("base directory: {}", base.path().display());

    match &cli.command {
        Command::Resolve(args) => {
            handle_resolve(args, base, config.match_case(args.case_sensitive()))
        }
        Command::Classify(args) => handle_classify(args, base, config.match_case(None)),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` takes precedence.
fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
