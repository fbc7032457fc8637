//! Subcommand implementations.
//!
//! Each command loads its inputs, runs the generator and formats a summary
//! according to the requested output format.

pub mod common;
pub mod completions;
pub mod generate;
pub mod inspect;
