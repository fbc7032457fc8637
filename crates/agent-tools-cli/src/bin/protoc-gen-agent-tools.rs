//! `protoc-gen-agent-tools`: protoc plugin emitting agent tool descriptors.
//!
//! ```bash
//! protoc --plugin=protoc-gen-agent-tools --agent-tools_out=src/generated \
//!     --agent-tools_opt=config=agent-tools.toml -I proto proto/**/*.proto
//! ```
//!
//! Logging is controlled by `RUST_LOG` and goes to stderr.

use agent_tools_cli::plugin::respond;
use agent_tools_cli::runner::init_logging;
use agent_tools_introspector::decode_request;
use anyhow::{Context, Result};
use prost::Message;
use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("protoc-gen-agent-tools: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    init_logging(false)?;

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("failed to read request from stdin")?;

    let request = decode_request(&input)?;
    let response = respond(&request);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&response.encode_to_vec())
        .context("failed to write response to stdout")?;
    stdout.flush()?;

    Ok(())
}
