//! Tests for compare, path, completions and the global --config flag.

use super::parse;
use crate::cli::{load_config, Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_compare() {
    match parse(&["urlnorm", "compare", "http://ya.ru", "http://ya.ru:80"]) {
        CliCommand::Compare { first, second } => {
            assert_eq!(first, "http://ya.ru");
            assert_eq!(second, "http://ya.ru:80");
        }
        _ => panic!("expected Compare"),
    }
}

#[test]
fn cli_parse_path() {
    match parse(&["urlnorm", "path", "/a/../b"]) {
        CliCommand::Path { paths } => assert_eq!(paths, vec!["/a/../b"]),
        _ => panic!("expected Path"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["urlnorm", "completions", "zsh"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Zsh),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from([
        "urlnorm",
        "normalize",
        "http://ya.ru",
        "--config",
        "/tmp/u.toml",
    ])
    .unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/u.toml")));
    assert!(matches!(cli.command, CliCommand::Normalize { .. }));
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    assert!(load_config(Some(path.as_path())).is_err());
    assert!(!path.exists());
}

#[test]
fn explicit_config_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("urlnorm.toml");
    std::fs::write(&path, "output = \"json\"\n").unwrap();
    let cfg = load_config(Some(path.as_path())).unwrap();
    assert_eq!(cfg.output, urlnorm_core::config::OutputFormat::Json);
}
