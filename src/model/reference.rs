//! Reference lines of the form `@{name}`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::chunk_name::ChunkName;

/// Pattern for a whole line that consists of a single `@{name}` reference.
pub static REF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*@\{(?P<refname>.*)\}\s*$").unwrap());

/// A parsed reference line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The referenced chunk.
    pub name: ChunkName,
    /// Number of leading spaces on the reference line.
    pub indent: usize,
}

impl Reference {
    /// Parses a raw line, returning `None` when it is not a reference line.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = REF_PATTERN.captures(line)?;
        Some(Self {
            name: ChunkName::trimmed(&caps["refname"]),
            indent: indentation(line),
        })
    }
}

/// Counts leading space characters. Tabs do not count.
pub fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Prefixes a raw line with `indent` spaces, keeping its terminator.
pub fn indent_line(indent: usize, line: &str) -> String {
    let mut out = String::with_capacity(indent + line.len());
    out.extend(std::iter::repeat(' ').take(indent));
    out.push_str(line);
    out
}
