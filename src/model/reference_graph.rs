//! Used-by graph between chunks and root resolution.

use indexmap::IndexMap;

use super::chunk_map::ChunkMap;
use super::chunk_name::ChunkName;

/// Maps each chunk name to the chunks whose bodies reference it.
///
/// Every defined chunk is registered, so an unreferenced chunk shows up with
/// an empty parent list rather than being absent. Names that are referenced
/// but never defined are present too, always with at least one parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceGraph {
    parents: IndexMap<ChunkName, Vec<ChunkName>>,
}

impl ReferenceGraph {
    /// Builds the graph in one pass over the finished chunk map.
    pub fn build(chunks: &ChunkMap) -> Self {
        let mut parents: IndexMap<ChunkName, Vec<ChunkName>> = chunks
            .names()
            .map(|name| (name.clone(), Vec::new()))
            .collect();

        for (name, definitions) in chunks.iter() {
            for reference in definitions.iter().flat_map(|d| d.references()) {
                parents.entry(reference.name).or_default().push(name.clone());
            }
        }

        tracing::debug!(
            "Reference graph: {} names, {} edges",
            parents.len(),
            parents.values().map(Vec::len).sum::<usize>()
        );

        Self { parents }
    }

    /// Returns the chunks referencing `name`, one entry per reference line.
    pub fn parents(&self, name: &ChunkName) -> Option<&[ChunkName]> {
        self.parents.get(name).map(Vec::as_slice)
    }

    /// Returns the unreferenced chunks, in discovery order.
    ///
    /// Each root becomes one output file named after the chunk.
    pub fn roots(&self) -> Vec<&ChunkName> {
        self.parents
            .iter()
            .filter(|(_, parents)| parents.is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}
