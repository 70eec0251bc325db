//! Tangle command implementation.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::{Result, ViscondeError};
use crate::interface::{Context, Document};
use crate::model::ChunkName;
use crate::readers::UnterminatedChunk;

/// Startup banner.
pub fn banner() -> String {
    format!("This is VISCONDE version {}.", env!("CARGO_PKG_VERSION"))
}

/// Warning for one unresolved reference.
pub fn missing_chunk_warning(name: &ChunkName) -> String {
    format!("! warning: missing text for chunk: `{}`", name)
}

/// Progress line printed before an output is written, completed by [`DONE`].
pub fn writing_file(name: &ChunkName) -> String {
    format!("Writing file `{}`... ", name)
}

/// Completes a [`writing_file`] line.
pub const DONE: &str = "[ DONE ]";

/// Dry-run stand-in for the progress line.
pub fn would_write_file(name: &ChunkName) -> String {
    format!("Would write file `{}`", name)
}

/// Options for the tangle command.
#[derive(Debug, Clone, Default)]
pub struct TangleOptions {
    /// Dry run - expand everything but write nothing.
    pub dry_run: bool,
    /// Suppress the banner and progress lines. Warnings still print.
    pub quiet: bool,
}

/// What a tangle run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TangleReport {
    /// Output files written (or that would be written on a dry run).
    pub written: Vec<PathBuf>,
    /// Unresolved references across all outputs, one per occurrence.
    pub missing: Vec<ChunkName>,
    /// Chunk dropped at end of input, if any.
    pub unterminated: Option<UnterminatedChunk>,
}

/// Executes the tangle command on one literate document, printing to stdout.
pub fn tangle(ctx: &Context, input: &Path, options: &TangleOptions) -> Result<TangleReport> {
    let stdout = io::stdout();
    tangle_to(ctx, input, options, &mut stdout.lock())
}

/// Executes the tangle command, writing console lines to `out`.
///
/// Roots are handled one at a time: expanded, then written, before the next
/// root is looked at. An error aborts the run and leaves earlier outputs on
/// disk.
pub fn tangle_to<W: Write>(
    ctx: &Context,
    input: &Path,
    options: &TangleOptions,
    out: &mut W,
) -> Result<TangleReport> {
    if !options.quiet && ctx.config.banner {
        writeln!(out, "{}", banner())?;
    }

    let document = Document::load(ctx, input)?;
    let roots = document.roots();
    tracing::debug!(
        "Tangling {}: {} chunks, {} roots",
        input.display(),
        document.chunks.len(),
        roots.len()
    );

    let mut report = TangleReport {
        unterminated: document.unterminated.clone(),
        ..TangleReport::default()
    };

    for root in roots {
        let tangled = document.tangle(ctx, root)?;
        for name in &tangled.missing {
            writeln!(out, "{}", missing_chunk_warning(name))?;
        }

        let path = ctx.output_path(root);
        if options.dry_run {
            writeln!(out, "{}", would_write_file(root))?;
        } else {
            if !options.quiet {
                write!(out, "{}", writing_file(root))?;
                out.flush()?;
            }
            ctx.file_cache
                .write(&path, &tangled.content())
                .map_err(|source| ViscondeError::Write {
                    path: path.clone(),
                    source,
                })?;
            if !options.quiet {
                writeln!(out, "{}", DONE)?;
            }
        }

        report.written.push(path);
        report.missing.extend(tangled.missing);
    }

    Ok(report)
}
