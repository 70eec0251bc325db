//! Error types for Visconde.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::ChunkName;

/// Main error type for Visconde operations.
#[derive(Error, Debug)]
pub enum ViscondeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Chunk not found: {0}")]
    ChunkNotFound(ChunkName),

    #[error("Cycle detected in chunk references: {}", render_chain(.0))]
    CycleDetected(Vec<ChunkName>),

    #[error("Expansion of `{root}` exceeded {limit} substitutions")]
    ExpansionLimit { root: ChunkName, limit: usize },
}

fn render_chain(chain: &[ChunkName]) -> String {
    chain
        .iter()
        .map(|name| format!("`{}`", name))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result type alias for Visconde operations.
pub type Result<T> = std::result::Result<T, ViscondeError>;
