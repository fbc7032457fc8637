//! protoc plugin protocol.
//!
//! protoc runs `protoc-gen-agent-tools` with a `CodeGeneratorRequest` on
//! stdin and expects a `CodeGeneratorResponse` on stdout. Options passed as
//! `--agent-tools_opt=key=value,key=value` arrive in the request parameter:
//!
//! | Key | Effect |
//! |-----|--------|
//! | `config` | generator config file (TOML) |
//! | `command_file` | designated command file |
//! | `output` | name of the generated file |

use crate::commands::common::resolve_config;
use agent_tools_codegen::AgentToolsGenerator;
use agent_tools_core::{Error, GeneratorConfig, Result};
use agent_tools_introspector::load_request;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use std::path::PathBuf;
use tracing::{error, info};

/// Options parsed from the request parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginOptions {
    /// Generator config file
    pub config: Option<PathBuf>,
    /// Designated command file
    pub command_file: Option<String>,
    /// Name of the generated file
    pub output: Option<String>,
}

impl PluginOptions {
    /// Parses a `key=value,key=value` parameter string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for unknown keys, entries without
    /// `=`, empty values or repeated keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_tools_cli::plugin::PluginOptions;
    ///
    /// let options = PluginOptions::parse("output=tools.ts, command_file=a/services/v1/command.proto")?;
    /// assert_eq!(options.output.as_deref(), Some("tools.ts"));
    /// assert_eq!(options.command_file.as_deref(), Some("a/services/v1/command.proto"));
    /// # Ok::<(), agent_tools_core::Error>(())
    /// ```
    pub fn parse(parameter: &str) -> Result<Self> {
        let mut options = Self::default();

        for entry in parameter.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "invalid plugin option '{entry}' (expected key=value)"
                ))
            })?;
            let (key, value) = (key.trim(), value.trim());

            if value.is_empty() {
                return Err(Error::InvalidArgument(format!(
                    "plugin option '{key}' has an empty value"
                )));
            }

            let slot_taken = match key {
                "config" => options.config.replace(PathBuf::from(value)).is_some(),
                "command_file" => options.command_file.replace(value.to_string()).is_some(),
                "output" => options.output.replace(value.to_string()).is_some(),
                _ => {
                    return Err(Error::InvalidArgument(format!(
                        "unknown plugin option '{key}' (expected: config, command_file, output)"
                    )));
                }
            };

            if slot_taken {
                return Err(Error::InvalidArgument(format!(
                    "plugin option '{key}' given more than once"
                )));
            }
        }

        Ok(options)
    }

    /// Resolves the generator config these options describe.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the result
    /// is invalid.
    pub fn resolve(self) -> Result<GeneratorConfig> {
        resolve_config(self.config.as_deref(), self.command_file, self.output)
    }
}

/// Answers a protoc request.
///
/// Failures are reported in the response's `error` field, as protoc
/// expects; a schema without service files yields an empty response.
#[must_use]
pub fn respond(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };

    match generate(request) {
        Ok(file) => response.file.extend(file),
        Err(err) => {
            error!("{err}");
            response.error = Some(err.to_string());
        }
    }

    response
}

fn generate(request: &CodeGeneratorRequest) -> Result<Option<File>> {
    let options = PluginOptions::parse(request.parameter.as_deref().unwrap_or_default())?;
    let generator = AgentToolsGenerator::new(options.resolve()?)?;

    let files = load_request(request)?;
    info!("Received {} files to generate", files.len());

    Ok(generator.generate(&files)?.map(|unit| File {
        name: Some(unit.file.path().to_string()),
        content: Some(unit.file.content().to_string()),
        ..Default::default()
    }))
}
