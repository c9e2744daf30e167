//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve input arguments to file paths
///
/// Arguments without glob metacharacters are taken as literal paths and
/// must exist. Patterns must match at least one file between them.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_pattern(pattern) {
            let path = Path::new(pattern);
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.to_path_buf()).into());
            }
            files.push(path.to_path_buf());
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::InvalidPattern(patterns.join(" ")).into());
    }

    files.sort();
    files.dedup();
    log::debug!("Resolved {} input file(s)", files.len());

    Ok(files)
}

fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}
