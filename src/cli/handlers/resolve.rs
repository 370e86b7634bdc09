//! Resolve command handler.

use anyhow::Result;

use crate::cli::ResolveArgs;
use crate::cli::output::{CasesListing, Output, OutputFormat};
use crate::domain::{MatchCase, PathSpec};
use crate::infra::BaseDir;
use crate::resolve::{Resolver, TestCase};

pub fn handle_resolve(args: &ResolveArgs, base: BaseDir, match_case: MatchCase) -> Result<()> {
    let spec = PathSpec::new(args.path.as_str()).with_optional_pattern(args.pattern.clone());
    let cases = Resolver::new(base)
        .with_match_case(match_case)
        .resolve(&spec)?;

    print!("{}", render_cases(&cases, args.format)?);
    Ok(())
}

/// Formats resolved cases for stdout.
pub(crate) fn render_cases(cases: &[TestCase], format: OutputFormat) -> Result<String> {
    let paths: Vec<String> = cases
        .iter()
        .map(|(path,)| path.display().to_string())
        .collect();

    let rendered = match format {
        OutputFormat::Human => {
            let mut out = String::new();
            if paths.is_empty() {
                out.push_str("No files found.\n");
            } else {
                for path in &paths {
                    out.push_str(path);
                    out.push('\n');
                }
                out.push('\n');
                out.push_str(&format!("{} file(s)\n", paths.len()));
            }
            out
        }
        OutputFormat::Json => {
            let count = paths.len();
            let output = Output::new(CasesListing {
                cases: paths,
                count,
            });
            format!("{}\n", serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Paths => paths.iter().map(|p| format!("{p}\n")).collect(),
    };

    Ok(rendered)
}
