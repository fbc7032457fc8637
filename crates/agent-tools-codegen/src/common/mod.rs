//! Code shared by the generator modules.

pub mod types;
pub mod typescript;

pub use types::GeneratedFile;
