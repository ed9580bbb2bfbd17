//! Completions command: shell completion script on stdout.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::Cli;

pub fn run_completions(out: &mut impl Write, shell: Shell) -> Result<i32> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "urlnorm", out);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_mentions_subcommands() {
        let mut out = Vec::new();
        run_completions(&mut out, Shell::Bash).unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("urlnorm"));
        assert!(script.contains("normalize"));
    }
}
