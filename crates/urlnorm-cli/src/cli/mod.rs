//! CLI for the urlnorm URL parser.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use urlnorm_core::config::{self, OutputFormat, UrlnormConfig};

use commands::{run_compare, run_completions, run_normalize, run_parse, run_path};

/// Top-level CLI for urlnorm.
#[derive(Debug, Parser)]
#[command(name = "urlnorm")]
#[command(about = "urlnorm: parse URLs and print their canonical form", long_about = None)]
pub struct Cli {
    /// Read configuration from this existing file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split URLs into components.
    Parse {
        /// Absolute URLs (`scheme://host...`).
        #[arg(required = true)]
        urls: Vec<String>,
        /// Output format (defaults to the `output` config value).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Print the canonical form of each URL.
    Normalize {
        /// Absolute URLs (`scheme://host...`).
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Compare two URLs by canonical form. Exit status 0 if equal, 1 otherwise.
    Compare {
        first: String,
        second: String,
    },

    /// Collapse `.` and `..` segments of absolute paths.
    Path {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn load_config(path: Option<&std::path::Path>) -> Result<UrlnormConfig> {
    match path {
        Some(p) => config::load_at(p),
        None => Ok(config::load_or_init().unwrap_or_else(|err| {
            tracing::warn!("using default config: {:#}", err);
            UrlnormConfig::default()
        })),
    }
}

impl CliCommand {
    /// Parses process arguments, runs the command and returns the exit status.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        let code = match cli.command {
            CliCommand::Parse { urls, format } => {
                let format = format.map(OutputFormat::from).unwrap_or(cfg.output);
                run_parse(&mut out, &urls, format, cfg.keep_going)?
            }
            CliCommand::Normalize { urls } => run_normalize(&mut out, &urls, cfg.keep_going)?,
            CliCommand::Compare { first, second } => run_compare(&mut out, &first, &second)?,
            CliCommand::Path { paths } => run_path(&mut out, &paths)?,
            CliCommand::Completions { shell } => run_completions(&mut out, shell)?,
        };

        Ok(code)
    }
}

#[cfg(test)]
mod tests;
