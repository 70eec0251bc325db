//! Chunk extraction from a literate document.

use std::path::{Path, PathBuf};

use crate::model::{ChunkMap, ChunkName, Definition};
use crate::text_location::TextLocation;

use super::fence::fence_marker;

/// A chunk whose fence was still open at end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedChunk {
    /// Name taken from the opening fence.
    pub name: ChunkName,
    /// Location of the opening fence.
    pub location: TextLocation,
    /// Number of body lines that were dropped.
    pub dropped_lines: usize,
}

/// A parsed literate document.
#[derive(Debug, Default)]
pub struct ParsedDocument {
    /// Chunks closed by a matching fence, in discovery order.
    pub chunks: ChunkMap,
    /// The chunk abandoned at end of input, if any. It is not in `chunks`.
    pub unterminated: Option<UnterminatedChunk>,
    /// Source file path.
    pub source_path: Option<PathBuf>,
}

impl ParsedDocument {
    /// Creates a new empty parsed document.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A chunk being accumulated.
#[derive(Debug)]
struct OpenChunk {
    name: ChunkName,
    fence_length: usize,
    location: TextLocation,
    lines: Vec<String>,
}

#[derive(Debug)]
enum State {
    Scanning { last_line_blank: bool },
    InChunk(OpenChunk),
}

/// Parses a document into chunks.
///
/// Outside a chunk, a fence opens one only when the previous non-skipped line
/// was blank; the start of input does not count as blank. Inside a chunk,
/// only a fence whose backtick run has exactly the opening length closes it,
/// so a chunk may carry fenced examples of a different length verbatim.
pub fn parse_document(input: &str, source_path: Option<&Path>) -> ParsedDocument {
    let mut doc = ParsedDocument::new();
    doc.source_path = source_path.map(Path::to_path_buf);

    let mut state = State::Scanning {
        last_line_blank: false,
    };

    for (index, line) in input.split_inclusive('\n').enumerate() {
        state = match state {
            State::Scanning { last_line_blank } => {
                if line.trim().is_empty() {
                    State::Scanning {
                        last_line_blank: true,
                    }
                } else if !last_line_blank {
                    State::Scanning {
                        last_line_blank: false,
                    }
                } else if let Some(fence) = fence_marker(line) {
                    State::InChunk(OpenChunk {
                        name: ChunkName::trimmed(fence.info),
                        fence_length: fence.length,
                        location: TextLocation::in_document(source_path, index + 1),
                        lines: Vec::new(),
                    })
                } else {
                    State::Scanning {
                        last_line_blank: false,
                    }
                }
            }
            State::InChunk(mut open) => match fence_marker(line) {
                Some(fence) if fence.length == open.fence_length => {
                    doc.chunks
                        .insert(open.name, Definition::new(open.location, open.lines));
                    State::Scanning {
                        last_line_blank: false,
                    }
                }
                _ => {
                    open.lines.push(line.to_string());
                    State::InChunk(open)
                }
            },
        };
    }

    if let State::InChunk(open) = state {
        tracing::warn!(
            "Chunk `{}` opened at {} is never closed; dropping {} lines",
            open.name,
            open.location,
            open.lines.len()
        );
        doc.unterminated = Some(UnterminatedChunk {
            name: open.name,
            location: open.location,
            dropped_lines: open.lines.len(),
        });
    }

    tracing::debug!(
        "Parsed {} chunks ({} definitions)",
        doc.chunks.len(),
        doc.chunks.definition_count()
    );

    doc
}
