//! Core model types for Visconde.

mod chunk_map;
mod chunk_name;
mod definition;
mod reference;
mod reference_graph;
mod tangle;

pub use chunk_map::ChunkMap;
pub use chunk_name::ChunkName;
pub use definition::Definition;
pub use reference::{indent_line, indentation, Reference, REF_PATTERN};
pub use reference_graph::ReferenceGraph;
pub use tangle::{tangle_root, CycleDetector, Expander, Tangled};
