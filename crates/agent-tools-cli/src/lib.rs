//! Front ends for the agent tool generator.
//!
//! Two binaries share this library:
//! - `protoc-gen-agent-tools`, the protoc plugin (see [`plugin`])
//! - `agent-tools`, a standalone CLI over serialized descriptor sets
//!   (see [`cli`] and [`commands`])

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::format_push_string)]

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod plugin;
pub mod runner;

pub use cli::{Cli, Commands};
