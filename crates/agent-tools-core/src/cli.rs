//! Types shared by the command-line front ends.
//!
//! ```
//! use agent_tools_core::cli::{ExitCode, OutputFormat};
//!
//! assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
//! assert!(ExitCode::SUCCESS.is_success());
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// How command summaries are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Indented JSON
    Json,
    /// `path=value` lines
    Text,
    /// Colorized tree
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Every format, in the order shown in help texts.
    pub const ALL: [Self; 3] = [Self::Json, Self::Text, Self::Pretty];

    /// Name accepted on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Parses a format name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
                Error::InvalidArgument(format!(
                    "unknown output format '{s}' (expected one of: {})",
                    names.join(", ")
                ))
            })
    }
}

/// Process exit status.
///
/// | Code | Meaning |
/// |------|---------|
/// | 0 | success |
/// | 1 | generation or I/O failure |
/// | 2 | bad arguments or configuration |
/// | 3 | unreadable or ambiguous schema |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExitCode(u8);

impl ExitCode {
    /// Run completed.
    pub const SUCCESS: Self = Self(0);
    /// Generation, template or I/O failure.
    pub const ERROR: Self = Self(1);
    /// Invalid arguments or configuration.
    pub const INVALID_INPUT: Self = Self(2);
    /// The schema could not be decoded or is ambiguous.
    pub const SCHEMA_ERROR: Self = Self(3);

    /// Numeric value for `std::process::exit`.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0 as i32
    }

    /// `true` for [`ExitCode::SUCCESS`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// Picks the exit code matching a library error.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_tools_core::Error;
    /// use agent_tools_core::cli::ExitCode;
    ///
    /// let err = Error::InvalidArgument("unknown option".to_string());
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::INVALID_INPUT);
    /// ```
    #[must_use]
    pub const fn for_error(err: &Error) -> Self {
        match err {
            Error::DescriptorDecode { .. }
            | Error::InvalidDescriptor { .. }
            | Error::AmbiguousCommandFile { .. } => Self::SCHEMA_ERROR,
            Error::ConfigError { .. } | Error::InvalidArgument(_) => Self::INVALID_INPUT,
            Error::UnsupportedField { .. } | Error::TemplateError { .. } | Error::Io { .. } => {
                Self::ERROR
            }
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code.0)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_format_parses_back() {
        for format in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
            assert_eq!(format.to_string(), format.as_str());
        }
    }

    #[test]
    fn test_format_parsing_ignores_case() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(
            "Pretty".parse::<OutputFormat>().unwrap(),
            OutputFormat::Pretty
        );
    }

    #[test]
    fn test_unknown_format_lists_choices() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(&err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("json, text, pretty"));
        assert!("".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_pretty_is_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Pretty);
        assert_eq!(ExitCode::default(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_exit_code_values() {
        let codes = [
            ExitCode::SUCCESS,
            ExitCode::ERROR,
            ExitCode::INVALID_INPUT,
            ExitCode::SCHEMA_ERROR,
        ];
        let values: Vec<i32> = codes.iter().map(ExitCode::as_i32).collect();

        assert_eq!(values, [0, 1, 2, 3]);
        assert!(ExitCode::SUCCESS.is_success());
        assert!(!ExitCode::SCHEMA_ERROR.is_success());
        assert_eq!(ExitCode::INVALID_INPUT.to_string(), "2");
    }

    #[test]
    fn test_exit_code_per_error_kind() {
        let cases = [
            (
                Error::DescriptorDecode {
                    what: "FileDescriptorSet".to_string(),
                    message: "truncated".to_string(),
                },
                ExitCode::SCHEMA_ERROR,
            ),
            (
                Error::AmbiguousCommandFile {
                    pattern: "/services/v1/command".to_string(),
                    candidates: vec!["a".to_string(), "b".to_string()],
                },
                ExitCode::SCHEMA_ERROR,
            ),
            (
                Error::ConfigError {
                    message: "bad".to_string(),
                },
                ExitCode::INVALID_INPUT,
            ),
            (
                Error::TemplateError {
                    message: "bad".to_string(),
                },
                ExitCode::ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ExitCode::for_error(&err), expected, "{err}");
        }

        let raw: i32 = ExitCode::ERROR.into();
        assert_eq!(raw, 1);
    }
}
