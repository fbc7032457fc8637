//! Output types of a generation run.
//!
//! # Examples
//!
//! ```
//! use agent_tools_codegen::GeneratedFile;
//!
//! let file = GeneratedFile {
//!     path: "agent_tools.ts".to_string(),
//!     content: "export const olvidAgentTools = [];\n".to_string(),
//! };
//!
//! assert_eq!(file.path(), "agent_tools.ts");
//! ```

use serde::{Deserialize, Serialize};

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
