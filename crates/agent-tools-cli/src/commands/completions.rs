//! Shell completion generation command.

use agent_tools_core::cli::ExitCode;
use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use tracing::info;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use agent_tools_cli::commands::completions;
/// use clap::Command;
/// use clap_complete::Shell;
///
/// let mut script = Vec::new();
/// completions::generate_completions(Shell::Bash, &mut Command::new("agent-tools"), &mut script);
/// assert!(!script.is_empty());
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    info!("Generating {} completions", shell);
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Errors
///
/// Never fails; returns `Result` like the other commands.
#[allow(clippy::unnecessary_wraps)]
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    generate_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_completions_mention_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            let mut script = Vec::new();
            generate_completions(shell, &mut Cli::command(), &mut script);

            let script = String::from_utf8(script).unwrap();
            assert!(script.contains("generate"), "{shell}");
            assert!(script.contains("inspect"), "{shell}");
        }
    }

    #[test]
    fn test_run_succeeds() {
        let mut cmd = Cli::command();
        assert_eq!(run(Shell::Bash, &mut cmd).unwrap(), ExitCode::SUCCESS);
    }
}
