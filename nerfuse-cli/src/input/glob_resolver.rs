//! Input pattern resolution using glob

use super::InputSource;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;

/// Pattern that stands for standard input
pub const STDIN_PATTERN: &str = "-";

/// Resolve input patterns to sources, in the order given.
///
/// No patterns means standard input. Every pattern must match at least one
/// file; a file matched twice is read once.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    if patterns.is_empty() {
        return Ok(vec![InputSource::Stdin]);
    }

    let mut sources: Vec<InputSource> = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            if !sources.contains(&InputSource::Stdin) {
                sources.push(InputSource::Stdin);
            }
            continue;
        }

        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        let mut matched = false;
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;
            if !path.is_file() {
                continue;
            }
            matched = true;
            let source = InputSource::File(path);
            if !sources.contains(&source) {
                sources.push(source);
            }
        }

        if !matched {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
    }

    Ok(sources)
}
