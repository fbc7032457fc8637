//! Protobuf schema introspection.
//!
//! Decodes descriptor sets and protoc plugin requests, resolves them with
//! `prost-reflect`, and extracts the files, services, methods and fields the
//! code generator walks.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod loader;
pub mod types;

pub use loader::{decode_request, load_descriptor_set, load_request, schema_from_pool};
pub use types::{
    CallKind, FieldDescriptor, FieldKind, FieldType, MethodDescriptor, ScalarType, SchemaFile,
    ServiceDescriptor, TypeRef,
};
