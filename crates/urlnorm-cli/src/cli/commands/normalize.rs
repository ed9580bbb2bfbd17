//! Normalize command: print the canonical form of each URL.

use anyhow::Result;
use std::io::Write;

use super::for_each_url;

/// Print one canonical URL per line.
pub fn run_normalize(out: &mut impl Write, urls: &[String], keep_going: bool) -> Result<i32> {
    for_each_url(urls, keep_going, |_, url| {
        writeln!(out, "{}", url)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(list: &[&str]) -> (i32, String) {
        let urls: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let code = run_normalize(&mut out, &urls, true).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_canonical_forms() {
        let (code, text) = normalize(&[
            "http://ya.ru",
            "http://ya.ru:55",
            "http://ya.ru#fff",
            "http://ya.ru/aa/fff/../../vvv",
        ]);
        assert_eq!(code, 0);
        assert_eq!(
            text,
            "http://ya.ru/\nhttp://ya.ru:55/\nhttp://ya.ru/#fff\nhttp://ya.ru/vvv\n"
        );
    }

    #[test]
    fn skips_invalid_and_reports_failure() {
        let (code, text) = normalize(&["http://ya.ru/..", "no-scheme"]);
        assert_eq!(code, 1);
        assert_eq!(text, "http://ya.ru/\n");
    }
}
