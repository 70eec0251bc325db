//! Execution context for Visconde operations.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::io::{FileCache, RealFileCache};
use crate::model::{ChunkMap, ChunkName, Expander};

/// Context for Visconde operations.
///
/// Contains configuration and file system access.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration.
    pub config: Config,
    /// File cache for reading documents and writing outputs.
    pub file_cache: Arc<dyn FileCache>,
    /// Base directory for relative paths.
    pub base_dir: PathBuf,
}

impl Context {
    /// Creates a new context backed by the real file system.
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        let file_cache =
            Arc::new(RealFileCache::new(base_dir.clone()).with_create_dirs(config.create_dirs));
        Self {
            config,
            file_cache,
            base_dir,
        }
    }

    /// Creates a context with an explicit file cache.
    pub fn with_file_cache(
        config: Config,
        base_dir: PathBuf,
        file_cache: Arc<dyn FileCache>,
    ) -> Self {
        Self {
            config,
            file_cache,
            base_dir,
        }
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Self {
        Self::new(Config::default(), base_dir)
    }

    /// Returns the path a root chunk is written to.
    ///
    /// The chunk name is used as-is; only the configured output directory is
    /// prepended.
    pub fn output_path(&self, root: &ChunkName) -> PathBuf {
        match self.config.output_dir() {
            Some(dir) => dir.join(root.as_path()),
            None => root.as_path().to_path_buf(),
        }
    }

    /// Returns an expander configured from this context.
    pub fn expander<'a>(&self, chunks: &'a ChunkMap) -> Expander<'a> {
        Expander::new(chunks)
            .with_cycle_detection(self.config.detect_cycles)
            .with_max_substitutions(self.config.max_substitutions)
    }
}
