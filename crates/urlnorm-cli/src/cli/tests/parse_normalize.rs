//! Tests for parse and normalize subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand, FormatArg};
use clap::Parser;

#[test]
fn cli_parse_parse() {
    match parse(&["urlnorm", "parse", "http://ya.ru"]) {
        CliCommand::Parse { urls, format } => {
            assert_eq!(urls, vec!["http://ya.ru".to_string()]);
            assert!(format.is_none());
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_json_many() {
    match parse(&[
        "urlnorm",
        "parse",
        "--format",
        "json",
        "http://ya.ru",
        "http://a:b@ya.ru:55/",
    ]) {
        CliCommand::Parse { urls, format } => {
            assert_eq!(urls.len(), 2);
            assert_eq!(format, Some(FormatArg::Json));
        }
        _ => panic!("expected Parse with --format json"),
    }
}

#[test]
fn cli_parse_parse_requires_url() {
    assert!(Cli::try_parse_from(["urlnorm", "parse"]).is_err());
}

#[test]
fn cli_parse_normalize() {
    match parse(&["urlnorm", "normalize", "http://ya.ru?aa=bb", "http://ya.ru#fff"]) {
        CliCommand::Normalize { urls } => {
            assert_eq!(urls, vec!["http://ya.ru?aa=bb", "http://ya.ru#fff"]);
        }
        _ => panic!("expected Normalize"),
    }
}
