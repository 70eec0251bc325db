//! Source locations for diagnostics.

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a chunk definition starts in the literate document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextLocation {
    /// The document path (if known).
    pub filename: Option<PathBuf>,
    /// Line number of the opening fence (1-indexed).
    pub line: usize,
}

impl TextLocation {
    /// Creates a TextLocation with only line information.
    pub fn line_only(line: usize) -> Self {
        Self {
            filename: None,
            line,
        }
    }

    /// Creates a TextLocation for a line of an optional document path.
    pub fn in_document(filename: Option<&Path>, line: usize) -> Self {
        Self {
            filename: filename.map(Path::to_path_buf),
            line,
        }
    }
}

impl Default for TextLocation {
    fn default() -> Self {
        Self::line_only(1)
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filename {
            Some(path) => write!(f, "{}:{}", path.display(), self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}
