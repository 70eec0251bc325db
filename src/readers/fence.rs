//! Backtick fence detection.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of three or more backticks at the start of a line, then the label.
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<fence>`{3,})(?P<info>.*)").unwrap());

/// A fence line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence<'a> {
    /// Number of backticks in the leading run.
    pub length: usize,
    /// Text after the run, trimmed. Names the chunk on an opening fence.
    pub info: &'a str,
}

/// Recognizes a fence line. Indented backticks are not fences.
pub fn fence_marker(line: &str) -> Option<Fence<'_>> {
    let caps = FENCE.captures(line)?;
    Some(Fence {
        length: caps["fence"].len(),
        info: caps.name("info").map_or("", |m| m.as_str().trim()),
    })
}
