//! Calling-convention classification.
//!
//! A server-streaming method whose response holds exactly one repeated
//! field is a "pure list": the listing RPC shape, rendered as a loop over
//! the stream. Every other streaming shape has no body yet.

use agent_tools_introspector::{CallKind, FieldKind, MethodDescriptor};
use serde::Serialize;

/// Classification of one method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Calling convention, as declared
    pub call_kind: CallKind,
    /// Server-streaming method with a single repeated response field
    pub is_pure_list: bool,
}

/// Invocation body a method gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    /// Await one call and serialize its result
    Unary,
    /// Iterate the response stream, one content item per element
    StreamList,
    /// No invocation body exists for this shape
    NotYetSupported,
}

impl Classification {
    /// Returns the body shape for this classification.
    #[must_use]
    pub const fn shape(&self) -> BodyShape {
        match self.call_kind {
            CallKind::Unary => BodyShape::Unary,
            CallKind::ServerStreaming if self.is_pure_list => BodyShape::StreamList,
            CallKind::ServerStreaming | CallKind::ClientStreaming | CallKind::BidiStreaming => {
                BodyShape::NotYetSupported
            }
        }
    }
}

/// Classifies a method.
///
/// # Examples
///
/// ```
/// use agent_tools_codegen::agent_tools::classifier::{BodyShape, classify};
/// use agent_tools_introspector::{CallKind, FieldDescriptor, MethodDescriptor, ScalarType};
///
/// let method = MethodDescriptor {
///     name: "IdentityList".to_string(),
///     call_kind: CallKind::ServerStreaming,
///     input_fields: vec![],
///     output_fields: vec![FieldDescriptor::scalar("ids", ScalarType::Uint64).repeated()],
/// };
///
/// let classification = classify(&method);
/// assert!(classification.is_pure_list);
/// assert_eq!(classification.shape(), BodyShape::StreamList);
/// ```
#[must_use]
pub fn classify(method: &MethodDescriptor) -> Classification {
    let is_pure_list = method.call_kind == CallKind::ServerStreaming
        && matches!(method.output_fields.as_slice(), [only] if only.kind() == FieldKind::List);

    Classification {
        call_kind: method.call_kind,
        is_pure_list,
    }
}
