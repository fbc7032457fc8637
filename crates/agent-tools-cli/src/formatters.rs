//! Output formatters for command summaries.
//!
//! All formats carry the same information:
//! - `json`: pretty-printed JSON for machines
//! - `text`: one `path=value` line per leaf, for `grep` and shell scripts
//! - `pretty`: indented, colorized tree for terminals

use agent_tools_core::cli::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

/// Formats data according to the output format.
///
/// # Errors
///
/// Returns an error if the data cannot be serialized.
///
/// # Examples
///
/// ```
/// use agent_tools_cli::formatters::format_output;
/// use agent_tools_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     tools: Vec<&'static str>,
/// }
///
/// let summary = Summary { tools: vec!["identitySetPhoto"] };
///
/// let output = format_output(&summary, OutputFormat::Text)?;
/// assert_eq!(output, "tools[0]=identitySetPhoto");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as indented JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Line-oriented plain text output.
pub mod text {
    use super::{Result, Serialize, Value};

    /// Formats data as `path=value` lines.
    ///
    /// Object keys are joined with `.`, array items are addressed as
    /// `[index]`. Empty containers and nulls produce no line.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;

        let mut lines = Vec::new();
        flatten(&value, "", &mut lines);

        Ok(lines.join("\n"))
    }

    fn flatten(value: &Value, path: &str, lines: &mut Vec<String>) {
        match value {
            Value::Null => {}
            Value::Bool(b) => lines.push(leaf(path, b)),
            Value::Number(n) => lines.push(leaf(path, n)),
            Value::String(s) => lines.push(leaf(path, s)),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    flatten(item, &format!("{path}[{i}]"), lines);
                }
            }
            Value::Object(entries) => {
                for (key, item) in entries {
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    flatten(item, &child, lines);
                }
            }
        }
    }

    fn leaf(path: &str, value: impl std::fmt::Display) -> String {
        if path.is_empty() {
            value.to_string()
        } else {
            format!("{path}={value}")
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize, Value};

    /// Formats data as a colorized tree.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;

        let mut out = String::new();
        match &value {
            Value::Object(_) | Value::Array(_) => write_nested(&value, 0, &mut out),
            scalar => out.push_str(&format_scalar(scalar)),
        }

        Ok(out.trim_end().to_string())
    }

    fn write_nested(value: &Value, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);

        match value {
            Value::Object(entries) => {
                for (key, item) in entries {
                    let key = key.blue().bold();
                    if is_leaf(item) {
                        out.push_str(&format!("{pad}{key}: {}\n", format_scalar(item)));
                    } else {
                        out.push_str(&format!("{pad}{key}:\n"));
                        write_nested(item, indent + 1, out);
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    if is_leaf(item) {
                        out.push_str(&format!("{pad}- {}\n", format_scalar(item)));
                    } else {
                        out.push_str(&format!("{pad}-\n"));
                        write_nested(item, indent + 1, out);
                    }
                }
            }
            scalar => out.push_str(&format!("{pad}{}\n", format_scalar(scalar))),
        }
    }

    /// Scalars and empty containers print on the key's line.
    fn is_leaf(value: &Value) -> bool {
        match value {
            Value::Object(entries) => entries.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => true,
        }
    }

    fn format_scalar(value: &Value) -> String {
        match value {
            Value::Null => "none".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(_) => "[]".dimmed().to_string(),
            Value::Object(_) => "{}".dimmed().to_string(),
        }
    }
}
