//! Agent tool code generation.
//!
//! Transforms an RPC schema into TypeScript tool descriptors using
//! Handlebars templates.
//!
//! # Examples
//!
//! ```
//! use agent_tools_codegen::AgentToolsGenerator;
//! use agent_tools_core::GeneratorConfig;
//!
//! let generator = AgentToolsGenerator::new(GeneratorConfig::default()).unwrap();
//!
//! // schemas without service files produce nothing
//! assert!(generator.generate(&[]).unwrap().is_none());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod agent_tools;
pub mod common;
pub mod template_engine;

pub use agent_tools::{AgentToolsGenerator, GeneratedUnit, GenerationReport, SkipReason};
pub use common::GeneratedFile;
pub use template_engine::TemplateEngine;
