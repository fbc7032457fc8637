//! Generate command.
//!
//! Runs the generator over a descriptor set and writes the tools module.

use super::common::{load_schema, resolve_config};
use crate::formatters::format_output;
use agent_tools_codegen::{AgentToolsGenerator, GeneratedUnit};
use agent_tools_core::Error;
use agent_tools_core::cli::{ExitCode, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Destination that prints the module instead of writing it.
pub const STDOUT: &str = "-";

/// Summary printed after a generation run.
#[derive(Debug, Serialize)]
pub struct GenerationSummary {
    /// Selected command file
    pub command_file: Option<String>,
    /// Where the module was written; `None` if nothing was generated
    pub output: Option<String>,
    /// Emitted tool names in output order
    pub tools: Vec<String>,
    /// Methods left out, with the reason
    pub skipped: Vec<SkippedMethod>,
}

/// One method left out of the output.
#[derive(Debug, Serialize)]
pub struct SkippedMethod {
    /// Owning service
    pub service: String,
    /// Method name
    pub method: String,
    /// Why no tool was emitted
    pub reason: String,
}

impl GenerationSummary {
    fn new(unit: Option<&GeneratedUnit>, output: Option<&Path>) -> Self {
        let Some(unit) = unit else {
            return Self {
                command_file: None,
                output: None,
                tools: Vec::new(),
                skipped: Vec::new(),
            };
        };

        Self {
            command_file: unit.report.command_file.clone(),
            output: output.map(|p| p.display().to_string()),
            tools: unit.report.emitted().map(str::to_string).collect(),
            skipped: unit
                .report
                .skipped()
                .filter_map(|m| {
                    m.skipped.as_ref().map(|reason| SkippedMethod {
                        service: m.service.clone(),
                        method: m.method.clone(),
                        reason: reason.to_string(),
                    })
                })
                .collect(),
        }
    }
}

/// Runs the generate command.
///
/// `output` may be a file, an existing directory (the configured file name
/// is appended) or [`STDOUT`]. Without it the module is written to the
/// current directory.
///
/// # Errors
///
/// Returns an error if the inputs cannot be loaded, generation fails or the
/// module cannot be written.
pub fn run(
    descriptor_set: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    command_file: Option<String>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = resolve_config(config, command_file, None)?;
    let files = load_schema(descriptor_set)?;

    let generator = AgentToolsGenerator::new(config)?;
    let unit = generator.generate(&files)?;

    if output.is_some_and(|p| p.as_os_str() == STDOUT) {
        if let Some(unit) = &unit {
            print!("{}", unit.file.content());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let written = match &unit {
        Some(unit) => {
            let target = destination(output, unit.file.path());
            write_module(&target, unit.file.content())?;
            info!("Wrote {}", target.display());
            Some(target)
        }
        None => None,
    };

    let summary = GenerationSummary::new(unit.as_ref(), written.as_deref());
    println!("{}", format_output(&summary, output_format)?);

    Ok(ExitCode::SUCCESS)
}

/// Resolves where the module goes.
fn destination(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}

fn write_module(target: &Path, content: &str) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(target, content).map_err(|source| Error::Io {
        path: target.to_path_buf(),
        source,
    })?;

    Ok(())
}
