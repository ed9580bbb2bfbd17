//! Parse command: print every component of each URL.

use anyhow::Result;
use std::io::Write;
use urlnorm_core::config::OutputFormat;
use urlnorm_core::{ParsedUrl, UrlResult};

use super::for_each_url;

const ABSENT: &str = "(not defined)";

fn or_absent(part: UrlResult<&str>) -> &str {
    part.unwrap_or(ABSENT)
}

pub(crate) fn write_text(out: &mut impl Write, input: &str, url: &ParsedUrl) -> Result<()> {
    writeln!(out, "{}", input)?;
    writeln!(out, "  canonical: {}", url)?;
    writeln!(out, "  scheme:    {}", url.scheme())?;
    writeln!(out, "  user:      {}", or_absent(url.user()))?;
    writeln!(out, "  pass:      {}", or_absent(url.pass()))?;
    writeln!(out, "  host:      {}", url.host())?;
    writeln!(out, "  port:      {}", url.port())?;
    writeln!(out, "  path:      {}", url.path())?;
    writeln!(out, "  query:     {}", url.query())?;
    writeln!(out, "  fragment:  {}", url.fragment())?;
    Ok(())
}

pub(crate) fn write_json(out: &mut impl Write, input: &str, url: &ParsedUrl) -> Result<()> {
    let record = serde_json::json!({
        "input": input,
        "canonical": url.to_string(),
        "components": url,
    });
    serde_json::to_writer(&mut *out, &record)?;
    writeln!(out)?;
    Ok(())
}

/// Parse each URL and print its components in `format`.
pub fn run_parse(
    out: &mut impl Write,
    urls: &[String],
    format: OutputFormat,
    keep_going: bool,
) -> Result<i32> {
    for_each_url(urls, keep_going, |input, url| match format {
        OutputFormat::Text => write_text(&mut *out, input, url),
        OutputFormat::Json => write_json(&mut *out, input, url),
    })
}
