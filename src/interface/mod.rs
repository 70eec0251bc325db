//! High-level interface tying the reader, model and file access together.

mod context;
mod document;

pub use context::Context;
pub use document::Document;
