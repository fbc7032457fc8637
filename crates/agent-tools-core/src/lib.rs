//! Core types, configuration and errors for the agent tool generator.
//!
//! This crate provides the foundational pieces shared by the introspector,
//! the code generator and the command-line front ends.
//!
//! # Architecture
//!
//! The core consists of:
//! - Error hierarchy with contextual information
//! - Generator configuration, including the invocation context consumed by
//!   the generated preamble
//! - CLI strong types (`OutputFormat`, `ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;

pub mod cli;

pub use config::{GeneratorConfig, InvocationContext};
pub use error::{Error, Result};
