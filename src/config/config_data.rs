//! Configuration data structures.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Main configuration structure for Visconde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory root chunk names are resolved against.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Create missing parent directories of output files.
    #[serde(default = "default_true")]
    pub create_dirs: bool,

    /// Fail when a chunk ends up inside its own expansion.
    #[serde(default = "default_true")]
    pub detect_cycles: bool,

    /// Upper bound on splices per output file.
    #[serde(default)]
    pub max_substitutions: Option<usize>,

    /// Print the startup banner.
    #[serde(default = "default_true")]
    pub banner: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            create_dirs: true,
            detect_cycles: true,
            max_substitutions: None,
            banner: true,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the output directory, if configured.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }
}
