//! Protobuf field to TypeBox type conversion.
//!
//! Maps one [`FieldDescriptor`] to the TypeBox builder expression used in a
//! tool's `parameters` object.
//!
//! | Protobuf                                    | TypeBox              |
//! |---------------------------------------------|----------------------|
//! | double, float, int32, uint32, fixed32, sfixed32, sint32 | `Type.Number()` |
//! | int64, uint64, fixed64, sfixed64, sint64    | `Type.BigInt()`      |
//! | bool                                        | `Type.Boolean()`     |
//! | string                                      | `Type.String()`      |
//! | bytes                                       | `Type.Uint8Array()`  |
//! | enum `E` declared in `.../<module>/v1/x.proto` | `Type.Enum(<module>.E)` |
//! | message                                     | unsupported          |
//!
//! Repeated fields become `Type.Optional(Type.Array(T))`; explicitly optional
//! fields become `Type.Optional(T)`.
//!
//! # Examples
//!
//! ```
//! use agent_tools_codegen::agent_tools::typebox::map_field;
//! use agent_tools_introspector::{FieldDescriptor, ScalarType};
//!
//! let ids = FieldDescriptor::scalar("ids", ScalarType::Uint64).repeated();
//! let expr = map_field(&ids).unwrap();
//! assert_eq!(expr.to_string(), "Type.Optional(Type.Array(Type.BigInt()))");
//! ```

use agent_tools_core::{Error, Result};
use agent_tools_introspector::{FieldDescriptor, FieldType, ScalarType};
use std::fmt;

/// TypeBox type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// `Type.Number()`
    Number,
    /// `Type.BigInt()`
    BigInt,
    /// `Type.Boolean()`
    Boolean,
    /// `Type.String()`
    String,
    /// `Type.Uint8Array()`
    Uint8Array,
    /// `Type.Enum(<module>.<name>)`
    Enum {
        /// Generated-module namespace, if the declaring path has one
        module: Option<String>,
        /// Enum name
        name: String,
    },
    /// `Type.Array(T)`
    Array(Box<TypeExpr>),
    /// `Type.Optional(T)`
    Optional(Box<TypeExpr>),
}

impl TypeExpr {
    /// Wraps an expression in `Type.Array`.
    #[must_use]
    pub fn array(inner: Self) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Wraps an expression in `Type.Optional`.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Returns `true` for `Type.Optional(..)` expressions.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

impl From<ScalarType> for TypeExpr {
    fn from(scalar: ScalarType) -> Self {
        match scalar {
            ScalarType::Double
            | ScalarType::Float
            | ScalarType::Int32
            | ScalarType::Fixed32
            | ScalarType::Uint32
            | ScalarType::Sfixed32
            | ScalarType::Sint32 => Self::Number,
            ScalarType::Int64
            | ScalarType::Uint64
            | ScalarType::Fixed64
            | ScalarType::Sfixed64
            | ScalarType::Sint64 => Self::BigInt,
            ScalarType::Bool => Self::Boolean,
            ScalarType::String => Self::String,
            ScalarType::Bytes => Self::Uint8Array,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => f.write_str("Type.Number()"),
            Self::BigInt => f.write_str("Type.BigInt()"),
            Self::Boolean => f.write_str("Type.Boolean()"),
            Self::String => f.write_str("Type.String()"),
            Self::Uint8Array => f.write_str("Type.Uint8Array()"),
            Self::Enum {
                module: Some(module),
                name,
            } => write!(f, "Type.Enum({module}.{name})"),
            Self::Enum { module: None, name } => write!(f, "Type.Enum({name})"),
            Self::Array(inner) => write!(f, "Type.Array({inner})"),
            Self::Optional(inner) => write!(f, "Type.Optional({inner})"),
        }
    }
}

/// Converts a field to its TypeBox expression.
///
/// # Errors
///
/// Returns [`Error::UnsupportedField`] for map fields and for message-typed
/// fields, singular or repeated: nested objects are not expanded.
///
/// # Examples
///
/// ```
/// use agent_tools_codegen::agent_tools::typebox::{TypeExpr, map_field};
/// use agent_tools_introspector::{FieldDescriptor, ScalarType, TypeRef};
///
/// let path = FieldDescriptor::scalar("filePath", ScalarType::String);
/// assert_eq!(map_field(&path).unwrap(), TypeExpr::String);
///
/// let id = FieldDescriptor::message(
///     "messageId",
///     TypeRef::new("MessageId", "olvid/daemon/datatypes/v1/message.proto"),
/// );
/// assert!(map_field(&id).unwrap_err().is_unsupported_field());
/// ```
pub fn map_field(field: &FieldDescriptor) -> Result<TypeExpr> {
    if field.is_map {
        return Err(Error::UnsupportedField {
            field: field.local_name.clone(),
            reason: "map fields cannot be expanded".to_string(),
        });
    }

    let element = match &field.field_type {
        FieldType::Scalar { scalar } => TypeExpr::from(*scalar),
        FieldType::Enum { reference } => TypeExpr::Enum {
            module: module_prefix(&reference.file).map(str::to_string),
            name: reference.name.clone(),
        },
        FieldType::Message { reference } => {
            return Err(Error::UnsupportedField {
                field: field.local_name.clone(),
                reason: format!("nested message type '{}' cannot be expanded", reference.name),
            });
        }
    };

    let expr = if field.is_repeated {
        TypeExpr::array(element)
    } else {
        element
    };

    // absent list == empty list
    if field.is_optional || field.is_repeated {
        Ok(TypeExpr::optional(expr))
    } else {
        Ok(expr)
    }
}

/// Returns the generated-module namespace of a declaring file: its
/// third-from-last path segment.
///
/// # Examples
///
/// ```
/// use agent_tools_codegen::agent_tools::typebox::module_prefix;
///
/// assert_eq!(module_prefix("olvid/daemon/datatypes/v1/message.proto"), Some("datatypes"));
/// assert_eq!(module_prefix("v1/message.proto"), None);
/// ```
#[must_use]
pub fn module_prefix(path: &str) -> Option<&str> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 3 {
        return None;
    }
    Some(segments[segments.len() - 3]).filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_tools_introspector::TypeRef;

    const STATUS_FILE: &str = "olvid/daemon/datatypes/v1/status.proto";

    #[test]
    fn test_scalar_table() {
        let expected = [
            (ScalarType::Double, "Type.Number()"),
            (ScalarType::Float, "Type.Number()"),
            (ScalarType::Int64, "Type.BigInt()"),
            (ScalarType::Uint64, "Type.BigInt()"),
            (ScalarType::Int32, "Type.Number()"),
            (ScalarType::Fixed64, "Type.BigInt()"),
            (ScalarType::Fixed32, "Type.Number()"),
            (ScalarType::Bool, "Type.Boolean()"),
            (ScalarType::String, "Type.String()"),
            (ScalarType::Bytes, "Type.Uint8Array()"),
            (ScalarType::Uint32, "Type.Number()"),
            (ScalarType::Sfixed32, "Type.Number()"),
            (ScalarType::Sfixed64, "Type.BigInt()"),
            (ScalarType::Sint32, "Type.Number()"),
            (ScalarType::Sint64, "Type.BigInt()"),
        ];
        assert_eq!(expected.len(), ScalarType::ALL.len());

        for (scalar, typebox) in expected {
            let field = FieldDescriptor::scalar("value", scalar);
            let expr = map_field(&field).unwrap();
            assert_eq!(expr.to_string(), typebox, "scalar {scalar}");
            assert!(!expr.is_optional(), "scalar {scalar}");
        }
    }

    #[test]
    fn test_optional_scalar() {
        let field = FieldDescriptor::scalar("nickname", ScalarType::String).optional();
        assert_eq!(
            map_field(&field).unwrap(),
            TypeExpr::optional(TypeExpr::String)
        );
    }

    #[test]
    fn test_list_is_always_optional() {
        let plain = FieldDescriptor::scalar("ids", ScalarType::Int32).repeated();
        let flagged = plain.clone().optional();

        let expected = TypeExpr::optional(TypeExpr::array(TypeExpr::Number));
        assert_eq!(map_field(&plain).unwrap(), expected);
        assert_eq!(map_field(&flagged).unwrap(), expected);
    }

    #[test]
    fn test_enum_uses_module_prefix() {
        let field = FieldDescriptor::enumeration("status", TypeRef::new("Status", STATUS_FILE));
        assert_eq!(
            map_field(&field).unwrap().to_string(),
            "Type.Enum(datatypes.Status)"
        );

        let list = field.repeated();
        assert_eq!(
            map_field(&list).unwrap().to_string(),
            "Type.Optional(Type.Array(Type.Enum(datatypes.Status)))"
        );
    }

    #[test]
    fn test_enum_without_prefix() {
        let field = FieldDescriptor::enumeration("status", TypeRef::new("Status", "status.proto"));
        assert_eq!(map_field(&field).unwrap().to_string(), "Type.Enum(Status)");
    }

    #[test]
    fn test_message_fields_unsupported() {
        let reference = TypeRef::new("Discussion", STATUS_FILE);

        let single = FieldDescriptor::message("discussion", reference.clone());
        let err = map_field(&single).unwrap_err();
        assert!(err.is_unsupported_field());
        assert!(err.to_string().contains("discussion"));

        let list = FieldDescriptor::message("discussions", reference).repeated();
        assert!(map_field(&list).unwrap_err().is_unsupported_field());
    }

    #[test]
    fn test_map_fields_unsupported() {
        let entry = TypeRef::new("Discussion_LabelsEntry", STATUS_FILE);
        let labels = FieldDescriptor::message("labels", entry).map();

        let err = map_field(&labels).unwrap_err();
        assert!(err.is_unsupported_field());
        assert!(err.to_string().contains("labels"));
    }

    #[test]
    fn test_nested_enum_export_name() {
        let field = FieldDescriptor::enumeration(
            "kind",
            TypeRef::new("MessageId_Type", "olvid/daemon/datatypes/v1/message.proto"),
        );
        assert_eq!(
            map_field(&field).unwrap().to_string(),
            "Type.Enum(datatypes.MessageId_Type)"
        );
    }

    #[test]
    fn test_module_prefix() {
        assert_eq!(
            module_prefix("olvid/daemon/command/v1/command.proto"),
            Some("command")
        );
        assert_eq!(module_prefix("a/b/c"), Some("a"));
        assert_eq!(module_prefix("/b/c"), None);
        assert_eq!(module_prefix("b/c"), None);
        assert_eq!(module_prefix("c"), None);
    }
}
