//! Generator configuration.
//!
//! [`GeneratorConfig`] controls which schema files are eligible and where the
//! generated unit goes. Its [`InvocationContext`] names everything the
//! generated preamble depends on (runtime accessor, account resolver, RPC
//! client), so the preamble renderer receives those collaborators explicitly
//! instead of looking them up.
//!
//! Every field has a default; a TOML file only needs the keys it overrides.
//!
//! # Examples
//!
//! ```
//! use agent_tools_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     output_file = "tools.generated.ts"
//!
//!     [invocation]
//!     tools_export = "chatAgentTools"
//! "#).unwrap();
//!
//! assert_eq!(config.output_file, "tools.generated.ts");
//! assert_eq!(config.invocation.tools_export, "chatAgentTools");
//! assert_eq!(config.services_marker, "/services/");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Path segment marking service files. Without any such file the
    /// generator produces no output.
    pub services_marker: String,

    /// Path fragment selecting the command file among the service files.
    pub command_file_pattern: String,

    /// Explicitly designated command file. Takes precedence over
    /// `command_file_pattern` and avoids ambiguity.
    pub command_file: Option<String>,

    /// Name of the generated file.
    pub output_file: String,

    /// First comment line of the generated file.
    pub file_header: String,

    /// Collaborators referenced by the generated preamble.
    pub invocation: InvocationContext,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            services_marker: "/services/".to_string(),
            command_file_pattern: "/services/v1/command".to_string(),
            command_file: None,
            output_file: "agent_tools.ts".to_string(),
            file_header: "Code generated by protoc-gen-agent-tools. DO NOT EDIT.".to_string(),
            invocation: InvocationContext::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML, contains
    /// unknown keys, or fails [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("failed to parse config: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or a configuration
    /// error if its content is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded generator config from {}", path.display());
        Ok(config)
    }

    /// Loads the given file, or the default config file when `path` is
    /// `None`. A missing default file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => {
                tracing::debug!("Config file not found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Platform config location: `<config dir>/agent-tools/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("agent-tools").join("config.toml"))
    }

    /// Checks that markers are non-empty and that every name spliced into
    /// generated code is a valid identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("services_marker", &self.services_marker)?;
        require_non_empty("command_file_pattern", &self.command_file_pattern)?;
        require_non_empty("output_file", &self.output_file)?;

        if self.output_file.contains("..") || self.output_file.starts_with('/') {
            return Err(Error::ConfigError {
                message: format!(
                    "output_file must be a relative path without '..': '{}'",
                    self.output_file
                ),
            });
        }

        if self.file_header.contains('\n') {
            return Err(Error::ConfigError {
                message: "file_header must be a single line".to_string(),
            });
        }

        if let Some(command_file) = &self.command_file {
            require_non_empty("command_file", command_file)?;
        }

        self.invocation.validate()
    }
}

/// Names of the collaborators the generated unit calls at runtime.
///
/// The generated client factory resolves the caller-supplied account id to
/// `{clientKey, serverUrl}` through `account_resolver`, falls back to
/// `default_account_id` when that account is unconfigured or incomplete, and
/// constructs a `client_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvocationContext {
    /// Module exporting the runtime accessor.
    pub runtime_import: String,
    /// Function returning the host runtime (which exposes `config.loadConfig()`).
    pub runtime_accessor: String,
    /// Module exporting the account resolver.
    pub accounts_import: String,
    /// Function resolving `{cfg, accountId}` to an account.
    pub account_resolver: String,
    /// Type returned by the account resolver.
    pub resolved_account_type: String,
    /// Module exporting the configuration type.
    pub types_import: String,
    /// Configuration type passed to the account resolver.
    pub config_type: String,
    /// Package providing the RPC client.
    pub client_package: String,
    /// RPC client class.
    pub client_type: String,
    /// Namespaces imported from the client package, used by enum parameters.
    pub client_namespaces: Vec<String>,
    /// Name of the generated client factory.
    pub client_factory: String,
    /// Method releasing a client after each invocation.
    pub client_close_method: String,
    /// Account property holding the client key.
    pub client_key_field: String,
    /// Account property holding the server URL.
    pub server_url_field: String,
    /// Account used when the requested one is incomplete.
    pub default_account_id: String,
    /// Package providing the `Type` schema builder.
    pub schema_package: String,
    /// Name of the exported tool array.
    pub tools_export: String,
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self {
            runtime_import: "../runtime".to_string(),
            runtime_accessor: "getOlvidRuntime".to_string(),
            accounts_import: "../accounts".to_string(),
            account_resolver: "resolveOlvidAccount".to_string(),
            resolved_account_type: "ResolvedOlvidAccount".to_string(),
            types_import: "../types".to_string(),
            config_type: "CoreConfig".to_string(),
            client_package: "@olvid/bot-node".to_string(),
            client_type: "OlvidClient".to_string(),
            client_namespaces: vec!["datatypes".to_string(), "command".to_string()],
            client_factory: "getOlvidClient".to_string(),
            client_close_method: "stop".to_string(),
            client_key_field: "clientKey".to_string(),
            server_url_field: "daemonUrl".to_string(),
            default_account_id: "default".to_string(),
            schema_package: "@sinclair/typebox".to_string(),
            tools_export: "olvidAgentTools".to_string(),
        }
    }
}

impl InvocationContext {
    /// Validates every identifier and import path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let identifiers = [
            ("invocation.runtime_accessor", &self.runtime_accessor),
            ("invocation.account_resolver", &self.account_resolver),
            ("invocation.resolved_account_type", &self.resolved_account_type),
            ("invocation.config_type", &self.config_type),
            ("invocation.client_type", &self.client_type),
            ("invocation.client_factory", &self.client_factory),
            ("invocation.client_close_method", &self.client_close_method),
            ("invocation.client_key_field", &self.client_key_field),
            ("invocation.server_url_field", &self.server_url_field),
            ("invocation.tools_export", &self.tools_export),
        ];
        for (key, value) in identifiers {
            require_identifier(key, value)?;
        }

        for namespace in &self.client_namespaces {
            require_identifier("invocation.client_namespaces", namespace)?;
        }

        let modules = [
            ("invocation.runtime_import", &self.runtime_import),
            ("invocation.accounts_import", &self.accounts_import),
            ("invocation.types_import", &self.types_import),
            ("invocation.client_package", &self.client_package),
            ("invocation.schema_package", &self.schema_package),
            ("invocation.default_account_id", &self.default_account_id),
        ];
        for (key, value) in modules {
            require_non_empty(key, value)?;
            if value.contains('"') || value.contains('\n') {
                return Err(Error::ConfigError {
                    message: format!("{key} cannot contain quotes or newlines"),
                });
            }
        }

        Ok(())
    }
}

fn require_non_empty(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ConfigError {
            message: format!("{key} cannot be empty"),
        });
    }
    Ok(())
}

/// Accepts ASCII JavaScript identifiers.
fn require_identifier(key: &str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if !valid {
        return Err(Error::ConfigError {
            message: format!("{key} is not a valid identifier: '{value}'"),
        });
    }
    Ok(())
}
