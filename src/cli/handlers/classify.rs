//! Classify command handler.

use anyhow::Result;

use crate::cli::ClassifyArgs;
use crate::cli::output::{Output, OutputFormat, TargetListing};
use crate::domain::{MatchCase, PathSpec, ResolvedTarget};
use crate::infra::BaseDir;
use crate::resolve::Resolver;

pub fn handle_classify(args: &ClassifyArgs, base: BaseDir, match_case: MatchCase) -> Result<()> {
    let spec = PathSpec::new(args.path.as_str()).with_optional_pattern(args.pattern.clone());
    let target = Resolver::new(base)
        .with_match_case(match_case)
        .target(&spec)?;

    print!("{}", render_target(&target, args.format)?);
    Ok(())
}

pub(crate) fn listing(target: &ResolvedTarget) -> TargetListing {
    match target {
        ResolvedTarget::SingleFile(path) => TargetListing {
            kind: "file",
            path: path.display().to_string(),
            pattern: None,
        },
        ResolvedTarget::Directory { path, pattern } => TargetListing {
            kind: "directory",
            path: path.display().to_string(),
            pattern: pattern.as_ref().map(|p| p.to_string()),
        },
    }
}

pub(crate) fn render_target(target: &ResolvedTarget, format: OutputFormat) -> Result<String> {
    let listing = listing(target);
    let rendered = match format {
        OutputFormat::Human => match &listing.pattern {
            Some(pattern) => format!("{}\t{}\t{}\n", listing.kind, listing.path, pattern),
            None => format!("{}\t{}\n", listing.kind, listing.path),
        },
        OutputFormat::Json => format!(
            "{}\n",
            serde_json::to_string_pretty(&Output::new(listing))?
        ),
        OutputFormat::Paths => format!("{}\n", listing.path),
    };
    Ok(rendered)
}
