//! Shared test utilities.

use crate::model::{ChunkMap, ChunkName, Definition};
use crate::text_location::TextLocation;

/// Creates a definition starting at `line` from a body with `\n` terminators.
pub fn make_definition(line: usize, body: &str) -> Definition {
    Definition::new(
        TextLocation::line_only(line),
        body.split_inclusive('\n').map(str::to_string).collect(),
    )
}

/// Builds a chunk map from (name, body) pairs, one definition each.
pub fn chunk_map(chunks: &[(&str, &str)]) -> ChunkMap {
    let mut map = ChunkMap::new();
    for (index, (name, body)) in chunks.iter().enumerate() {
        map.insert(ChunkName::new(*name), make_definition(index * 10 + 1, body));
    }
    map
}
