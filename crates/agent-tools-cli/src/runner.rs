//! Command dispatch and logging setup.

use agent_tools_core::cli::{ExitCode, OutputFormat};
use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Commands;
use crate::commands;

/// Initializes logging.
///
/// Logs always go to stderr: in plugin mode stdout carries the protobuf
/// response. `verbose` forces the debug level, otherwise `RUST_LOG` applies
/// with `info` as fallback.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes a CLI command.
///
/// # Errors
///
/// Returns an error if the command fails.
pub fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            descriptor_set,
            output,
            config,
            command_file,
        } => commands::generate::run(
            &descriptor_set,
            output.as_deref(),
            config.as_deref(),
            command_file,
            output_format,
        ),
        Commands::Inspect {
            descriptor_set,
            config,
            command_file,
        } => commands::inspect::run(
            &descriptor_set,
            config.as_deref(),
            command_file,
            output_format,
        ),
        Commands::Completions { shell } => {
            use crate::cli::Cli;
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
