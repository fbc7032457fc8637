//! Types for agent tool generation.
//!
//! Template contexts (one per Handlebars template) and the report of a
//! generation run.

use crate::agent_tools::classifier::Classification;
use crate::agent_tools::naming::MethodNames;
use crate::agent_tools::typebox::TypeExpr;
use crate::common::types::GeneratedFile;
use agent_tools_core::InvocationContext;
use agent_tools_introspector::CallKind;
use serde::Serialize;
use std::fmt;

/// One entry of a tool's parameter schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// TypeBox type
    pub type_expr: TypeExpr,
}

impl Parameter {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, type_expr: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_expr,
        }
    }
}

/// One callable tool, built once per eligible method.
///
/// # Examples
///
/// ```
/// use agent_tools_codegen::agent_tools::{Parameter, ToolDescriptor, TypeExpr};
///
/// let tool = ToolDescriptor {
///     name: "identitySetPhoto".to_string(),
///     label: "IdentitySetPhoto".to_string(),
///     description: "rpc service: IdentityCommandService, method: IdentitySetPhoto".to_string(),
///     parameter_schema: vec![Parameter::new("accountId", TypeExpr::String)],
///     body: String::new(),
/// };
///
/// assert_eq!(tool.parameter_schema[0].name, "accountId");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Tool name (the client call name)
    pub name: String,
    /// Display label
    pub label: String,
    /// `rpc service: <service>, method: <method>`
    pub description: String,
    /// Parameters in declaration order, `accountId` first
    pub parameter_schema: Vec<Parameter>,
    /// Rendered `execute` body
    pub body: String,
}

/// Why a method produced no tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// A required input field cannot be mapped to a parameter type
    UnsupportedField {
        /// Field name
        field: String,
        /// Mapper message
        reason: String,
    },
    /// No invocation body exists for this calling convention
    NotYetSupported {
        /// Calling convention of the method
        call_kind: CallKind,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedField { field, reason } => {
                write!(f, "unsupported field '{field}': {reason}")
            }
            Self::NotYetSupported { call_kind } => {
                write!(f, "{call_kind} methods are not supported yet")
            }
        }
    }
}

/// Outcome of assembling one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assembled {
    /// The method became a tool
    Tool(ToolDescriptor),
    /// The method was left out
    Skipped(SkipReason),
}

/// Per-method line of a [`GenerationReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodReport {
    /// Owning service
    pub service: String,
    /// Method name
    pub method: String,
    /// Classification of the method
    #[serde(flatten)]
    pub classification: Classification,
    /// Derived names
    #[serde(flatten)]
    pub names: MethodNames,
    /// Set when the method was left out
    pub skipped: Option<SkipReason>,
}

impl MethodReport {
    /// Returns `true` if a tool was emitted for this method.
    #[must_use]
    pub const fn is_emitted(&self) -> bool {
        self.skipped.is_none()
    }
}

/// Summary of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Selected command file, if any
    pub command_file: Option<String>,
    /// Every method of the command file, in declaration order
    pub methods: Vec<MethodReport>,
}

impl GenerationReport {
    /// Names of the emitted tools, in output order.
    pub fn emitted(&self) -> impl Iterator<Item = &str> {
        self.methods
            .iter()
            .filter(|m| m.is_emitted())
            .map(|m| m.names.call_name.as_str())
    }

    /// Methods left out of the output.
    pub fn skipped(&self) -> impl Iterator<Item = &MethodReport> {
        self.methods.iter().filter(|m| !m.is_emitted())
    }

    /// Number of emitted tools.
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.emitted().count()
    }

    /// Number of skipped methods.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }
}

/// Generated file together with its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// The generated TypeScript module
    pub file: GeneratedFile,
    /// What went into it
    pub report: GenerationReport,
}

/// Context for the `agent_tools/execute` template.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteContext {
    /// Declared method name
    pub method_name: String,
    /// Client method to invoke
    pub call_name: String,
    /// Input field names, bound from `params` and passed positionally
    pub arguments: Vec<String>,
    /// Iterate a response stream instead of awaiting one result
    pub is_stream_list: bool,
    /// Client factory function
    pub client_factory: String,
    /// Client release method
    pub client_close_method: String,
}

/// Context for the `agent_tools/tool` template.
#[derive(Debug, Clone, Serialize)]
pub struct ToolContext {
    /// Tool name
    pub name: String,
    /// Display label
    pub label: String,
    /// Description
    pub description: String,
    /// Rendered parameters
    pub parameters: Vec<ParameterContext>,
    /// Rendered `execute` body
    pub body: String,
}

/// One rendered parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterContext {
    /// Parameter name
    pub name: String,
    /// TypeBox expression text
    pub type_expr: String,
}

impl From<&ToolDescriptor> for ToolContext {
    fn from(tool: &ToolDescriptor) -> Self {
        Self {
            name: tool.name.clone(),
            label: tool.label.clone(),
            description: tool.description.clone(),
            parameters: tool
                .parameter_schema
                .iter()
                .map(|p| ParameterContext {
                    name: p.name.clone(),
                    type_expr: p.type_expr.to_string(),
                })
                .collect(),
            body: tool.body.clone(),
        }
    }
}

/// Context for the `agent_tools/module` template.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleContext {
    /// First comment line
    pub file_header: String,
    /// Runtime collaborators of the preamble
    pub invocation: InvocationContext,
    /// One section per service of the command file
    pub sections: Vec<ServiceSection>,
}

/// Tools of one service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceSection {
    /// Service name, rendered as a grouping comment
    pub service_name: String,
    /// Rendered tool literals
    pub tools: Vec<String>,
}
