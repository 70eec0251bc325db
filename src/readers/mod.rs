//! Readers for extracting chunks from literate documents.

mod document;
mod fence;

pub use document::{parse_document, ParsedDocument, UnterminatedChunk};
pub use fence::{fence_marker, Fence};
