//! Ordered chunk table.

use indexmap::IndexMap;

use super::chunk_name::ChunkName;
use super::definition::Definition;

/// All chunks of a document, keyed by name.
///
/// - Keys keep the order in which names were first closed by a fence.
/// - Each name maps to its definitions in document order; a name present in
///   the map always has at least one definition.
///
/// The map is filled by the parser and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkMap {
    chunks: IndexMap<ChunkName, Vec<Definition>>,
}

impl ChunkMap {
    /// Creates a new empty chunk map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a definition under the given name, creating the chunk if new.
    pub fn insert(&mut self, name: ChunkName, definition: Definition) {
        self.chunks.entry(name).or_default().push(definition);
    }

    /// Gets all definitions of a chunk.
    pub fn get(&self, name: &ChunkName) -> Option<&[Definition]> {
        self.chunks.get(name).map(Vec::as_slice)
    }

    /// Iterates over the raw lines of every definition of a chunk, in order.
    pub fn lines(&self, name: &ChunkName) -> Option<impl Iterator<Item = &str>> {
        self.get(name)
            .map(|defs| defs.iter().flat_map(|d| d.lines.iter().map(String::as_str)))
    }

    /// Returns all chunk names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &ChunkName> {
        self.chunks.keys()
    }

    /// Returns all (name, definitions) pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&ChunkName, &[Definition])> {
        self.chunks.iter().map(|(name, defs)| (name, defs.as_slice()))
    }

    /// Returns the number of distinct chunk names.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if no chunk was defined.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the total number of definitions across all chunks.
    pub fn definition_count(&self) -> usize {
        self.chunks.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_definition;

    #[test]
    fn test_insert_and_get() {
        let mut map = ChunkMap::new();
        map.insert(ChunkName::new("main.c"), make_definition(3, "int main;\n"));

        let defs = map.get(&ChunkName::new("main.c")).unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].lines, vec!["int main;\n"]);
        assert!(map.get(&ChunkName::new("other")).is_none());
    }

    #[test]
    fn test_multiple_definitions_same_name() {
        let mut map = ChunkMap::new();
        map.insert(ChunkName::new("utils"), make_definition(1, "one\n"));
        map.insert(ChunkName::new("other"), make_definition(5, "x\n"));
        map.insert(ChunkName::new("utils"), make_definition(9, "two\n"));

        assert_eq!(map.len(), 2);
        assert_eq!(map.definition_count(), 3);

        let lines: Vec<_> = map.lines(&ChunkName::new("utils")).unwrap().collect();
        assert_eq!(lines, vec!["one\n", "two\n"]);
    }

    #[test]
    fn test_discovery_order() {
        let mut map = ChunkMap::new();
        map.insert(ChunkName::new("c"), make_definition(1, "third\n"));
        map.insert(ChunkName::new("a"), make_definition(4, "first\n"));
        map.insert(ChunkName::new("b"), make_definition(7, "second\n"));
        map.insert(ChunkName::new("a"), make_definition(10, "again\n"));

        let names: Vec<_> = map.names().map(ChunkName::as_str).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
