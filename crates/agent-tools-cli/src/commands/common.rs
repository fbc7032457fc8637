//! Input loading shared by the CLI commands and the protoc plugin.

use agent_tools_core::{Error, GeneratorConfig};
use agent_tools_introspector::{SchemaFile, load_descriptor_set};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads a generator config and applies per-run overrides.
///
/// Without `config` the default config file is used if present, otherwise
/// the defaults. Overrides are validated together with the rest of the
/// config.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or the resulting
/// config is invalid.
///
/// # Examples
///
/// ```
/// use agent_tools_cli::commands::common::resolve_config;
///
/// # let dir = tempfile::tempdir()?;
/// # let path = dir.path().join("config.toml");
/// # std::fs::write(&path, "output_file = \"tools.ts\"")?;
/// let config = resolve_config(Some(path.as_path()), None, Some("custom.ts".to_string()))?;
/// assert_eq!(config.output_file, "custom.ts");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve_config(
    config: Option<&Path>,
    command_file: Option<String>,
    output_file: Option<String>,
) -> agent_tools_core::Result<GeneratorConfig> {
    let mut resolved = GeneratorConfig::load_or_default(config)?;

    if command_file.is_some() {
        resolved.command_file = command_file;
    }
    if let Some(output_file) = output_file {
        resolved.output_file = output_file;
    }

    resolved.validate()?;
    Ok(resolved)
}

/// Reads a serialized `FileDescriptorSet` into schema files.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a valid
/// descriptor set.
pub fn load_schema(descriptor_set: &Path) -> Result<Vec<SchemaFile>> {
    let bytes = fs::read(descriptor_set).map_err(|source| Error::Io {
        path: descriptor_set.to_path_buf(),
        source,
    })?;

    load_descriptor_set(&bytes)
        .with_context(|| format!("failed to load descriptor set {}", descriptor_set.display()))
}
