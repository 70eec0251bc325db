//! Visconde - Literate Programming Tangler
//!
//! Extracts named, fenced chunks from a literate document and writes every
//! chunk that no other chunk references to a file of the same name, with all
//! `@{name}` reference lines recursively replaced by the named chunk's text.
//!
//! # Pipeline
//!
//! - **Parse**: [`readers::parse_document`] collects chunk definitions
//! - **Graph**: [`model::ReferenceGraph::build`] records which chunks use which
//! - **Roots**: [`model::ReferenceGraph::roots`] picks the unreferenced chunks
//! - **Expand**: [`model::Expander`] splices references, propagating indentation
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use visconde::commands::{tangle, TangleOptions};
//! use visconde::interface::Context;
//!
//! let ctx = Context::default_for_dir(std::env::current_dir().unwrap());
//! tangle(&ctx, Path::new("program.md"), &TangleOptions::default()).unwrap();
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;
pub mod text_location;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Result, ViscondeError};
pub use interface::{Context, Document};
pub use model::{ChunkMap, ChunkName, Definition, ReferenceGraph, Tangled};

pub use commands::{TangleOptions, TangleReport};
