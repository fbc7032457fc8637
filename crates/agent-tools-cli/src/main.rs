//! `agent-tools`: generate agent tool descriptors from a descriptor set.
//!
//! # Examples
//!
//! ```bash
//! protoc --include_imports --descriptor_set_out=schema.pb -I proto proto/**/*.proto
//!
//! # what would be generated
//! agent-tools inspect --descriptor-set schema.pb
//!
//! # write agent_tools.ts into src/generated/
//! agent-tools generate --descriptor-set schema.pb --output src/generated/
//! ```

use agent_tools_cli::Cli;
use agent_tools_cli::runner::{execute_command, init_logging};
use agent_tools_core::cli::{ExitCode, OutputFormat};
use anyhow::Result;
use clap::Parser;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };

    exit_code.into()
}

fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(cli.verbose)?;

    let output_format = cli.format.parse::<OutputFormat>()?;

    execute_command(cli.command, output_format)
}

/// Maps library errors to their semantic exit code; anything else is a
/// general failure.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<agent_tools_core::Error>()
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}
