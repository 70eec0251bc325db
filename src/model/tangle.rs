//! Tangle algorithm for expanding `@{name}` reference lines.

use std::collections::{HashSet, VecDeque};

use crate::errors::{Result, ViscondeError};

use super::chunk_map::ChunkMap;
use super::chunk_name::ChunkName;
use super::reference::{indent_line, Reference};

/// Tracks the chunks currently being spliced, for cycle detection.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    /// Chunks being expanded, outermost first (for error reporting).
    stack: Vec<ChunkName>,
    /// Set for O(1) membership checks.
    active: HashSet<ChunkName>,
}

impl CycleDetector {
    /// Creates a new cycle detector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters a chunk, failing with the full chain if it is already active.
    pub fn enter(&mut self, name: &ChunkName) -> Result<()> {
        if self.active.contains(name) {
            let mut chain = self.stack.clone();
            chain.push(name.clone());
            return Err(ViscondeError::CycleDetected(chain));
        }
        self.active.insert(name.clone());
        self.stack.push(name.clone());
        Ok(())
    }

    /// Leaves the innermost chunk.
    pub fn exit(&mut self) {
        if let Some(name) = self.stack.pop() {
            self.active.remove(&name);
        }
    }
}

/// An entry in the expansion buffer.
#[derive(Debug)]
enum Pending {
    Line(String),
    /// Queued after the last line of a spliced chunk.
    Leave,
}

/// Fully expanded output of one root chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tangled {
    /// The root chunk, also the output path.
    pub root: ChunkName,
    /// Expanded lines, each with its original terminator.
    pub lines: Vec<String>,
    /// Unresolved references, one entry per occurrence, in output order.
    pub missing: Vec<ChunkName>,
    /// Number of references spliced in.
    pub substitutions: usize,
}

impl Tangled {
    /// Returns the output text.
    pub fn content(&self) -> String {
        self.lines.concat()
    }
}

/// Expands root chunks against an immutable chunk map.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    chunks: &'a ChunkMap,
    detect_cycles: bool,
    max_substitutions: Option<usize>,
}

impl<'a> Expander<'a> {
    /// Creates an expander with cycle detection on and no substitution cap.
    pub fn new(chunks: &'a ChunkMap) -> Self {
        Self {
            chunks,
            detect_cycles: true,
            max_substitutions: None,
        }
    }

    /// Enables or disables cycle detection.
    #[must_use]
    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }

    /// Caps the number of splices per root.
    #[must_use]
    pub fn with_max_substitutions(mut self, limit: Option<usize>) -> Self {
        self.max_substitutions = limit;
        self
    }

    /// Expands a root chunk until no reference lines remain.
    ///
    /// The buffer starts with every definition of `root`. Each reference to a
    /// known chunk is replaced in place by that chunk's lines, shifted right by
    /// the reference's indentation, and scanning resumes at the first spliced
    /// line. References to unknown chunks are kept verbatim and recorded in
    /// [`Tangled::missing`].
    ///
    /// With cycle detection on, a `Leave` marker follows every spliced block,
    /// so the detector's stack always holds exactly the chunks that produced
    /// the line being looked at.
    pub fn tangle(&self, root: &ChunkName) -> Result<Tangled> {
        let root_lines = self
            .chunks
            .lines(root)
            .ok_or_else(|| ViscondeError::ChunkNotFound(root.clone()))?;

        let mut detector = CycleDetector::new();
        if self.detect_cycles {
            detector.enter(root)?;
        }

        let mut buffer: VecDeque<Pending> = root_lines
            .map(|text| Pending::Line(text.to_string()))
            .collect();

        let mut tangled = Tangled {
            root: root.clone(),
            ..Tangled::default()
        };

        while let Some(pending) = buffer.pop_front() {
            let line = match pending {
                Pending::Line(line) => line,
                Pending::Leave => {
                    detector.exit();
                    continue;
                }
            };

            let Some(reference) = Reference::parse(&line) else {
                tangled.lines.push(line);
                continue;
            };

            let Some(lines) = self.chunks.lines(&reference.name) else {
                tangled.missing.push(reference.name);
                tangled.lines.push(line);
                continue;
            };

            if self.detect_cycles {
                detector.enter(&reference.name)?;
                buffer.push_front(Pending::Leave);
            }

            tangled.substitutions += 1;
            if let Some(limit) = self.max_substitutions {
                if tangled.substitutions > limit {
                    return Err(ViscondeError::ExpansionLimit {
                        root: root.clone(),
                        limit,
                    });
                }
            }

            let spliced: Vec<Pending> = lines
                .map(|text| Pending::Line(indent_line(reference.indent, text)))
                .collect();
            for pending in spliced.into_iter().rev() {
                buffer.push_front(pending);
            }
        }

        tracing::debug!(
            "Expanded `{}`: {} lines, {} substitutions, {} missing",
            root,
            tangled.lines.len(),
            tangled.substitutions,
            tangled.missing.len()
        );

        Ok(tangled)
    }
}

/// Expands a root chunk with default settings.
pub fn tangle_root(chunks: &ChunkMap, root: &ChunkName) -> Result<Tangled> {
    Expander::new(chunks).tangle(root)
}
