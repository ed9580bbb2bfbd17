//! CLI command handlers. Each command is in its own file.
//!
//! Handlers write to any `io::Write` and return the process exit status.

mod compare;
mod completions;
mod normalize;
mod parse;
mod path;

pub use compare::run_compare;
pub use completions::run_completions;
pub use normalize::run_normalize;
pub use parse::run_parse;
pub use path::run_path;

use anyhow::{Context, Result};
use urlnorm_core::{parse, ParsedUrl};

/// Parses every URL and hands the successes to `emit`.
///
/// Invalid URLs are reported on stderr. With `keep_going` the rest are still
/// processed and the status is 1; without it the first failure is returned as an error.
pub(crate) fn for_each_url<F>(urls: &[String], keep_going: bool, mut emit: F) -> Result<i32>
where
    F: FnMut(&str, &ParsedUrl) -> Result<()>,
{
    let mut failed = 0usize;
    for url in urls {
        match parse(url) {
            Ok(parsed) => emit(url, &parsed)?,
            Err(err) if keep_going => {
                tracing::debug!("skipping invalid URL: {}", err);
                eprintln!("urlnorm: {}", err);
                failed += 1;
            }
            Err(err) => return Err(err).context("aborting on first invalid URL"),
        }
    }
    if failed > 0 {
        tracing::info!(failed, total = urls.len(), "some URLs were invalid");
        return Ok(1);
    }
    Ok(0)
}
