//! Chunk names.

use std::fmt;
use std::path::Path;

/// A chunk name identifies a (possibly multiply defined) chunk.
///
/// Names are matched exactly and case-sensitively. A root chunk's name
/// doubles as its output path, so it may contain path separators. The empty
/// name is valid: it collects every fence opened without a label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkName(String);

impl ChunkName {
    /// Creates a new ChunkName from a string, verbatim.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a ChunkName from fence or reference text, trimming whitespace.
    pub fn trimmed(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name as a relative or absolute output path.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ChunkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ChunkName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChunkName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ChunkName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
