//! Command handlers for the CLI.

mod classify;
mod resolve;


use anyhow::Result;
use clap::CommandFactory;
use std::io;

use super::{Cli, CompletionsArgs};

// Re-export public items
pub use classify::handle_classify;
pub use resolve::handle_resolve;

// Re-export for tests
#[cfg(test)]
pub(crate) use classify::render_target;
#[cfg(test)]
pub(crate) use resolve::render_cases;

/// Writes shell completions for `filepaths` to stdout.
pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "filepaths", &mut io::stdout());
    Ok(())
}
