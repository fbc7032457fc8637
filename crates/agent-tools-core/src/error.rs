//! Error types for the agent tool generator.
//!
//! One error hierarchy is shared by every library crate of the workspace.
//! Field-level failures are recoverable (the offending method is skipped),
//! everything else propagates to the caller.
//!
//! # Examples
//!
//! ```
//! use agent_tools_core::{Error, Result};
//!
//! fn check_marker(marker: &str) -> Result<()> {
//!     if marker.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "services_marker cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_marker("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the agent tool generator.
#[derive(Error, Debug)]
pub enum Error {
    /// Input bytes could not be decoded as a protobuf message.
    ///
    /// Raised when stdin does not hold a `CodeGeneratorRequest` or a file
    /// does not hold a `FileDescriptorSet`.
    #[error("Failed to decode {what}: {message}")]
    DescriptorDecode {
        /// What was being decoded
        what: String,
        /// Description of the decode failure
        message: String,
    },

    /// The descriptor graph is inconsistent.
    ///
    /// Raised when unresolved type references or duplicate symbols prevent
    /// building a descriptor pool.
    #[error("Invalid descriptor set: {message}")]
    InvalidDescriptor {
        /// Description of the inconsistency
        message: String,
    },

    /// A field needs a parameter type the mapper cannot express.
    ///
    /// Nested messages would require recursive object construction. The
    /// method owning the field is skipped; generation continues.
    #[error("Unsupported field '{field}': {reason}")]
    UnsupportedField {
        /// Local name of the field
        field: String,
        /// Why the field cannot be mapped
        reason: String,
    },

    /// More than one file matches the command file pattern.
    #[error("Ambiguous command file: {} files match '{pattern}' ({})", candidates.len(), candidates.join(", "))]
    AmbiguousCommandFile {
        /// Pattern used for selection
        pattern: String,
        /// Matching file paths in schema order
        candidates: Vec<String>,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid, missing required fields,
    /// or cannot be parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or plugin parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem access failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if the input could not be decoded or resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_tools_core::Error;
    ///
    /// let err = Error::InvalidDescriptor {
    ///     message: "unresolved type '.pkg.Missing'".to_string(),
    /// };
    /// assert!(err.is_descriptor_error());
    /// ```
    #[must_use]
    pub const fn is_descriptor_error(&self) -> bool {
        matches!(
            self,
            Self::DescriptorDecode { .. } | Self::InvalidDescriptor { .. }
        )
    }

    /// Returns `true` if this is an unsupported field error.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_tools_core::Error;
    ///
    /// let err = Error::UnsupportedField {
    ///     field: "messageId".to_string(),
    ///     reason: "nested objects are not supported".to_string(),
    /// };
    /// assert!(err.is_unsupported_field());
    /// ```
    #[must_use]
    pub const fn is_unsupported_field(&self) -> bool {
        matches!(self, Self::UnsupportedField { .. })
    }

    /// Returns `true` if command file selection was ambiguous.
    #[must_use]
    pub const fn is_ambiguous_command_file(&self) -> bool {
        matches!(self, Self::AmbiguousCommandFile { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_tools_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "output_file cannot be empty".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }
}

/// Result type alias used throughout the workspace.
///
/// # Examples
///
/// ```
/// use agent_tools_core::{Result, Error};
///
/// fn parse_flag(value: &str) -> Result<bool> {
///     match value {
///         "true" => Ok(true),
///         "false" => Ok(false),
///         other => Err(Error::InvalidArgument(format!("not a flag: {other}"))),
///     }
/// }
///
/// assert!(parse_flag("true").unwrap());
/// assert!(parse_flag("maybe").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
