//! Compare command: equality by canonical form.

use anyhow::{Context, Result};
use std::io::Write;
use urlnorm_core::parse;

/// Print `equal` or `different`; status 0 when equal, 1 otherwise.
pub fn run_compare(out: &mut impl Write, first: &str, second: &str) -> Result<i32> {
    let a = parse(first).with_context(|| format!("first URL {first:?}"))?;
    let b = parse(second).with_context(|| format!("second URL {second:?}"))?;

    if a == b {
        writeln!(out, "equal: {}", a)?;
        Ok(0)
    } else {
        writeln!(out, "different: {} != {}", a, b)?;
        Ok(1)
    }
}
