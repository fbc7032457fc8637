//! Inspect command.
//!
//! Dry run of the generator: reports the outcome for every method of the
//! command file without writing anything.

use super::common::{load_schema, resolve_config};
use crate::formatters::format_output;
use agent_tools_codegen::{AgentToolsGenerator, GenerationReport};
use agent_tools_core::cli::{ExitCode, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Result of an inspection.
#[derive(Debug, Serialize)]
pub struct Inspection {
    /// `false` when no file carries the services marker
    pub has_services: bool,
    /// Per-method outcome
    #[serde(flatten)]
    pub report: GenerationReport,
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the inputs cannot be loaded or generation fails.
pub fn run(
    descriptor_set: &Path,
    config: Option<&Path>,
    command_file: Option<String>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = resolve_config(config, command_file, None)?;
    let files = load_schema(descriptor_set)?;

    let generator = AgentToolsGenerator::new(config)?;
    let unit = generator.generate(&files)?;

    let inspection = Inspection {
        has_services: unit.is_some(),
        report: unit.map(|u| u.report).unwrap_or_default(),
    };

    println!("{}", format_output(&inspection, output_format)?);

    Ok(ExitCode::SUCCESS)
}
