//! Chunk definitions.

use super::reference::Reference;
use crate::text_location::TextLocation;

/// One fenced block contributing to a chunk.
///
/// Lines are stored verbatim, each keeping its trailing newline when the
/// document had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Location of the opening fence.
    pub location: TextLocation,

    /// Raw body lines.
    pub lines: Vec<String>,
}

impl Definition {
    /// Creates a new Definition.
    pub fn new(location: TextLocation, lines: Vec<String>) -> Self {
        Self { location, lines }
    }

    /// Iterates over the reference lines of the body, in order.
    pub fn references(&self) -> impl Iterator<Item = Reference> + '_ {
        self.lines.iter().filter_map(|line| Reference::parse(line))
    }
}
