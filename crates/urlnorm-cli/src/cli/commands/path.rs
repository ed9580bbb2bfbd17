//! Path command: normalize bare paths.

use anyhow::Result;
use std::io::Write;
use urlnorm_core::normalize_path;

/// Print the normalized form of each path. Paths without a leading `/` get one.
pub fn run_path(out: &mut impl Write, paths: &[String]) -> Result<i32> {
    for path in paths {
        let normalized = if path.starts_with('/') {
            normalize_path(path)
        } else {
            normalize_path(&format!("/{}", path))
        };
        writeln!(out, "{}", normalized)?;
    }
    Ok(0)
}
