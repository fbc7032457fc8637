//! Descriptor loading.
//!
//! Turns protobuf descriptors into the [`SchemaFile`] model. Two entry points
//! cover the two ways a schema arrives:
//!
//! - [`load_request`]: a protoc plugin `CodeGeneratorRequest` (only the files
//!   protoc asked us to generate for are returned, in request order)
//! - [`load_descriptor_set`]: a serialized `FileDescriptorSet` as written by
//!   `protoc --descriptor_set_out` (every file, in set order)

use crate::types::{
    CallKind, FieldDescriptor, FieldType, MethodDescriptor, ScalarType, SchemaFile,
    ServiceDescriptor, TypeRef,
};
use agent_tools_core::{Error, Result};
use prost::Message;
use prost_reflect::{DescriptorPool, FileDescriptor, Kind};
use prost_types::FileDescriptorSet;
use prost_types::compiler::CodeGeneratorRequest;
use tracing::debug;

/// Decodes a `CodeGeneratorRequest` read from protoc.
///
/// # Errors
///
/// Returns [`Error::DescriptorDecode`] if the bytes are not a valid request.
pub fn decode_request(bytes: &[u8]) -> Result<CodeGeneratorRequest> {
    CodeGeneratorRequest::decode(bytes).map_err(|e| Error::DescriptorDecode {
        what: "CodeGeneratorRequest".to_string(),
        message: e.to_string(),
    })
}

/// Extracts the files protoc asked to generate for.
///
/// Dependencies travel in the request too, so that type references resolve,
/// but they are not returned.
///
/// # Errors
///
/// Returns [`Error::InvalidDescriptor`] if the descriptors do not form a
/// consistent pool or a requested file is missing from it.
pub fn load_request(request: &CodeGeneratorRequest) -> Result<Vec<SchemaFile>> {
    let pool = DescriptorPool::from_file_descriptor_set(FileDescriptorSet {
        file: request.proto_file.clone(),
    })
    .map_err(|e| Error::InvalidDescriptor {
        message: e.to_string(),
    })?;

    schema_from_pool(&pool, Some(&request.file_to_generate))
}

/// Extracts every file of a serialized `FileDescriptorSet`.
///
/// # Errors
///
/// Returns [`Error::DescriptorDecode`] if the bytes are not a descriptor set,
/// or [`Error::InvalidDescriptor`] if the set is inconsistent.
pub fn load_descriptor_set(bytes: &[u8]) -> Result<Vec<SchemaFile>> {
    let set = FileDescriptorSet::decode(bytes).map_err(|e| Error::DescriptorDecode {
        what: "FileDescriptorSet".to_string(),
        message: e.to_string(),
    })?;

    let pool =
        DescriptorPool::from_file_descriptor_set(set).map_err(|e| Error::InvalidDescriptor {
            message: e.to_string(),
        })?;

    schema_from_pool(&pool, None)
}

/// Converts the files of a resolved pool.
///
/// With `only` set, returns exactly those files in that order; otherwise
/// returns every file in pool order.
///
/// # Errors
///
/// Returns [`Error::InvalidDescriptor`] if a requested file is not in the pool.
pub fn schema_from_pool(pool: &DescriptorPool, only: Option<&[String]>) -> Result<Vec<SchemaFile>> {
    let files: Vec<FileDescriptor> = match only {
        Some(names) => names
            .iter()
            .map(|name| {
                pool.get_file_by_name(name)
                    .ok_or_else(|| Error::InvalidDescriptor {
                        message: format!("file to generate '{name}' is not in the request"),
                    })
            })
            .collect::<Result<_>>()?,
        None => pool.files().collect(),
    };

    let schema: Vec<SchemaFile> = files.iter().map(convert_file).collect();

    debug!(
        "Loaded {} files ({} services)",
        schema.len(),
        schema.iter().map(|f| f.services.len()).sum::<usize>()
    );

    Ok(schema)
}

fn convert_file(file: &FileDescriptor) -> SchemaFile {
    let services = file
        .services()
        .map(|service| ServiceDescriptor {
            name: service.name().to_string(),
            methods: service
                .methods()
                .map(|method| MethodDescriptor {
                    name: method.name().to_string(),
                    call_kind: CallKind::from_streaming(
                        method.is_client_streaming(),
                        method.is_server_streaming(),
                    ),
                    input_fields: method.input().fields().map(|f| convert_field(&f)).collect(),
                    output_fields: method.output().fields().map(|f| convert_field(&f)).collect(),
                })
                .collect(),
        })
        .collect();

    SchemaFile {
        path: file.name().to_string(),
        services,
    }
}

fn convert_field(field: &prost_reflect::FieldDescriptor) -> FieldDescriptor {
    let scalar = |scalar| FieldType::Scalar { scalar };

    let field_type = match field.kind() {
        Kind::Double => scalar(ScalarType::Double),
        Kind::Float => scalar(ScalarType::Float),
        Kind::Int64 => scalar(ScalarType::Int64),
        Kind::Uint64 => scalar(ScalarType::Uint64),
        Kind::Int32 => scalar(ScalarType::Int32),
        Kind::Fixed64 => scalar(ScalarType::Fixed64),
        Kind::Fixed32 => scalar(ScalarType::Fixed32),
        Kind::Bool => scalar(ScalarType::Bool),
        Kind::String => scalar(ScalarType::String),
        Kind::Bytes => scalar(ScalarType::Bytes),
        Kind::Uint32 => scalar(ScalarType::Uint32),
        Kind::Sfixed32 => scalar(ScalarType::Sfixed32),
        Kind::Sfixed64 => scalar(ScalarType::Sfixed64),
        Kind::Sint32 => scalar(ScalarType::Sint32),
        Kind::Sint64 => scalar(ScalarType::Sint64),
        Kind::Message(message) => {
            let file = message.parent_file();
            FieldType::Message {
                reference: TypeRef::new(
                    export_name(message.full_name(), file.package_name()),
                    file.name(),
                ),
            }
        }
        Kind::Enum(enumeration) => {
            let file = enumeration.parent_file();
            FieldType::Enum {
                reference: TypeRef::new(
                    export_name(enumeration.full_name(), file.package_name()),
                    file.name(),
                ),
            }
        }
    };

    FieldDescriptor {
        local_name: local_name(field.name()),
        field_type,
        is_optional: field.field_descriptor_proto().proto3_optional(),
        is_repeated: field.is_list(),
        is_map: field.is_map(),
    }
}

/// Name under which generated client code exports a type: the path below
/// the package with `.` turned into `_` (`MessageId.Type` is `MessageId_Type`).
fn export_name(full_name: &str, package: &str) -> String {
    let relative = if package.is_empty() {
        full_name
    } else {
        full_name
            .strip_prefix(package)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(full_name)
    };
    relative.replace('.', "_")
}

/// Property names generated message classes cannot use as-is.
const RESERVED_PROPERTIES: [&str; 4] = ["constructor", "toString", "toJSON", "valueOf"];

/// Field name as seen by generated client code.
///
/// Underscores are dropped and the letter after one is uppercased; a digit
/// cancels the pending uppercase. A `json_name` option does not affect it.
/// Names that collide with object built-ins get a `$` suffix.
fn local_name(proto_name: &str) -> String {
    let mut out = String::with_capacity(proto_name.len());
    let mut upper_next = false;

    for c in proto_name.chars() {
        match c {
            '_' => upper_next = true,
            '0'..='9' => {
                out.push(c);
                upper_next = false;
            }
            _ if upper_next => {
                out.extend(c.to_uppercase());
                upper_next = false;
            }
            _ => out.push(c),
        }
    }

    if RESERVED_PROPERTIES.contains(&out.as_str()) {
        out.push('$');
    }
    out
}
