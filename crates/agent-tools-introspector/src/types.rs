//! Schema model consumed by the code generator.
//!
//! A deliberately small view of protobuf descriptors: files with their
//! services, services with their methods, methods with their input and output
//! fields. Declaration order is preserved everywhere because generated
//! parameter order follows it.
//!
//! # Examples
//!
//! ```
//! use agent_tools_introspector::{CallKind, FieldDescriptor, MethodDescriptor, ScalarType};
//!
//! let method = MethodDescriptor {
//!     name: "IdentitySetPhoto".to_string(),
//!     call_kind: CallKind::Unary,
//!     input_fields: vec![FieldDescriptor::scalar("filePath", ScalarType::String)],
//!     output_fields: vec![],
//! };
//!
//! assert_eq!(method.input_fields[0].local_name, "filePath");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Protobuf scalar field types.
///
/// Discriminants are the `FieldDescriptorProto.Type` codes; codes 10
/// (group), 11 (message) and 14 (enum) are not scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// `double`
    Double = 1,
    /// `float`
    Float = 2,
    /// `int64`
    Int64 = 3,
    /// `uint64`
    Uint64 = 4,
    /// `int32`
    Int32 = 5,
    /// `fixed64`
    Fixed64 = 6,
    /// `fixed32`
    Fixed32 = 7,
    /// `bool`
    Bool = 8,
    /// `string`
    String = 9,
    /// `bytes`
    Bytes = 12,
    /// `uint32`
    Uint32 = 13,
    /// `sfixed32`
    Sfixed32 = 15,
    /// `sfixed64`
    Sfixed64 = 16,
    /// `sint32` (zigzag)
    Sint32 = 17,
    /// `sint64` (zigzag)
    Sint64 = 18,
}

impl ScalarType {
    /// Every scalar type, in code order.
    pub const ALL: [Self; 15] = [
        Self::Double,
        Self::Float,
        Self::Int64,
        Self::Uint64,
        Self::Int32,
        Self::Fixed64,
        Self::Fixed32,
        Self::Bool,
        Self::String,
        Self::Bytes,
        Self::Uint32,
        Self::Sfixed32,
        Self::Sfixed64,
        Self::Sint32,
        Self::Sint64,
    ];

    /// Returns the `FieldDescriptorProto.Type` code.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_tools_introspector::ScalarType;
    ///
    /// assert_eq!(ScalarType::String.code(), 9);
    /// assert_eq!(ScalarType::Sint64.code(), 18);
    /// ```
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Looks up a scalar type by its descriptor code.
    ///
    /// Returns `None` for non-scalar codes (group, message, enum) and for
    /// codes outside the protobuf range.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_tools_introspector::ScalarType;
    ///
    /// assert_eq!(ScalarType::from_code(12), Some(ScalarType::Bytes));
    /// assert_eq!(ScalarType::from_code(11), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => Self::Double,
            2 => Self::Float,
            3 => Self::Int64,
            4 => Self::Uint64,
            5 => Self::Int32,
            6 => Self::Fixed64,
            7 => Self::Fixed32,
            8 => Self::Bool,
            9 => Self::String,
            12 => Self::Bytes,
            13 => Self::Uint32,
            15 => Self::Sfixed32,
            16 => Self::Sfixed64,
            17 => Self::Sint32,
            18 => Self::Sint64,
            _ => return None,
        })
    }

    /// Returns the `.proto` keyword of this type.
    #[must_use]
    pub const fn proto_name(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Int32 => "int32",
            Self::Fixed64 => "fixed64",
            Self::Fixed32 => "fixed32",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Uint32 => "uint32",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.proto_name())
    }
}

/// Reference to a message or enum type declared somewhere in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Exported type name: the path below the package with `.` turned into
    /// `_` (e.g. `MessageId`, or `MessageId_Type` for a nested enum)
    pub name: String,
    /// Path of the file declaring the type
    /// (e.g. `olvid/daemon/datatypes/v1/message.proto`)
    pub file: String,
}

impl TypeRef {
    /// Creates a type reference.
    #[must_use]
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

/// Element type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    /// Scalar value
    Scalar {
        /// Scalar type
        scalar: ScalarType,
    },
    /// Message value
    Message {
        /// Referenced message
        reference: TypeRef,
    },
    /// Enum value
    Enum {
        /// Referenced enum
        reference: TypeRef,
    },
}

/// Coarse shape of a field.
///
/// `Map` and `List` take precedence over the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Singular scalar
    Scalar,
    /// Singular message
    Message,
    /// Singular enum
    Enum,
    /// Repeated field
    List,
    /// Map field
    Map,
}

/// One field of a request or response message.
///
/// # Examples
///
/// ```
/// use agent_tools_introspector::{FieldDescriptor, FieldKind, ScalarType};
///
/// let tags = FieldDescriptor::scalar("tags", ScalarType::String).repeated();
/// assert_eq!(tags.kind(), FieldKind::List);
/// assert_eq!(tags.scalar_type(), Some(ScalarType::String));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as seen by generated client code (lowerCamelCase)
    pub local_name: String,
    /// Element type
    pub field_type: FieldType,
    /// Explicit `optional` marker
    pub is_optional: bool,
    /// Repeated field (maps are not repeated here)
    pub is_repeated: bool,
    /// Map field; `field_type` is then the synthetic entry message
    #[serde(default)]
    pub is_map: bool,
}

impl FieldDescriptor {
    /// Creates a singular, non-optional scalar field.
    #[must_use]
    pub fn scalar(local_name: impl Into<String>, scalar: ScalarType) -> Self {
        Self::with_type(local_name, FieldType::Scalar { scalar })
    }

    /// Creates a singular, non-optional message field.
    #[must_use]
    pub fn message(local_name: impl Into<String>, reference: TypeRef) -> Self {
        Self::with_type(local_name, FieldType::Message { reference })
    }

    /// Creates a singular, non-optional enum field.
    #[must_use]
    pub fn enumeration(local_name: impl Into<String>, reference: TypeRef) -> Self {
        Self::with_type(local_name, FieldType::Enum { reference })
    }

    fn with_type(local_name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            local_name: local_name.into(),
            field_type,
            is_optional: false,
            is_repeated: false,
            is_map: false,
        }
    }

    /// Marks the field as explicitly optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Marks the field as repeated.
    #[must_use]
    pub const fn repeated(mut self) -> Self {
        self.is_repeated = true;
        self
    }

    /// Marks the field as a map.
    #[must_use]
    pub const fn map(mut self) -> Self {
        self.is_map = true;
        self
    }

    /// Returns the coarse shape of the field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        if self.is_map {
            return FieldKind::Map;
        }
        if self.is_repeated {
            return FieldKind::List;
        }
        match self.field_type {
            FieldType::Scalar { .. } => FieldKind::Scalar,
            FieldType::Message { .. } => FieldKind::Message,
            FieldType::Enum { .. } => FieldKind::Enum,
        }
    }

    /// Returns the scalar element type, if any.
    #[must_use]
    pub const fn scalar_type(&self) -> Option<ScalarType> {
        match self.field_type {
            FieldType::Scalar { scalar } => Some(scalar),
            _ => None,
        }
    }

    /// Returns the declaring file of the referenced message or enum, if any.
    #[must_use]
    pub fn referenced_type_file(&self) -> Option<&str> {
        match &self.field_type {
            FieldType::Scalar { .. } => None,
            FieldType::Message { reference } | FieldType::Enum { reference } => {
                Some(&reference.file)
            }
        }
    }
}

/// RPC calling convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallKind {
    /// One request, one response
    Unary,
    /// One request, a stream of responses
    ServerStreaming,
    /// A stream of requests, one response
    ClientStreaming,
    /// Streams in both directions
    BidiStreaming,
}

impl CallKind {
    /// Derives the calling convention from the descriptor's streaming flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_tools_introspector::CallKind;
    ///
    /// assert_eq!(CallKind::from_streaming(false, true), CallKind::ServerStreaming);
    /// assert_eq!(CallKind::from_streaming(true, true), CallKind::BidiStreaming);
    /// ```
    #[must_use]
    pub const fn from_streaming(client_streaming: bool, server_streaming: bool) -> Self {
        match (client_streaming, server_streaming) {
            (false, false) => Self::Unary,
            (false, true) => Self::ServerStreaming,
            (true, false) => Self::ClientStreaming,
            (true, true) => Self::BidiStreaming,
        }
    }

    /// Returns the snake_case name of the calling convention.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unary => "unary",
            Self::ServerStreaming => "server_streaming",
            Self::ClientStreaming => "client_streaming",
            Self::BidiStreaming => "bidi_streaming",
        }
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One RPC method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// PascalCase method name, unique within its service
    pub name: String,
    /// Calling convention
    pub call_kind: CallKind,
    /// Request fields in declaration order
    pub input_fields: Vec<FieldDescriptor>,
    /// Response fields in declaration order
    pub output_fields: Vec<FieldDescriptor>,
}

/// One RPC service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// PascalCase service name
    pub name: String,
    /// Methods in declaration order
    pub methods: Vec<MethodDescriptor>,
}

/// One `.proto` file and the services it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// File path as known to protoc (e.g. `olvid/daemon/services/v1/command_service.proto`)
    pub path: String,
    /// Services in declaration order
    pub services: Vec<ServiceDescriptor>,
}
