//! Loading a literate document and resolving its output files.

use std::path::{Path, PathBuf};

use crate::errors::{Result, ViscondeError};
use crate::model::{ChunkMap, ChunkName, ReferenceGraph, Tangled};
use crate::readers::{parse_document, ParsedDocument, UnterminatedChunk};

use super::context::Context;

/// A parsed document together with its reference graph.
#[derive(Debug)]
pub struct Document {
    /// Path the document was read from.
    pub path: PathBuf,
    /// All closed chunks.
    pub chunks: ChunkMap,
    /// Used-by edges between chunks.
    pub graph: ReferenceGraph,
    /// Chunk dropped at end of input, if any.
    pub unterminated: Option<UnterminatedChunk>,
}

impl Document {
    /// Reads and parses a document through the context's file cache.
    pub fn load(ctx: &Context, path: &Path) -> Result<Self> {
        let input = ctx
            .file_cache
            .read(path)
            .map_err(|source| ViscondeError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_parsed(parse_document(&input, Some(path)), path))
    }

    /// Builds the reference graph over an already parsed document.
    pub fn from_parsed(parsed: ParsedDocument, path: &Path) -> Self {
        let graph = ReferenceGraph::build(&parsed.chunks);
        Self {
            path: parsed.source_path.unwrap_or_else(|| path.to_path_buf()),
            chunks: parsed.chunks,
            graph,
            unterminated: parsed.unterminated,
        }
    }

    /// Returns the root chunks, in discovery order.
    pub fn roots(&self) -> Vec<&ChunkName> {
        self.graph.roots()
    }

    /// Expands one root with the context's expansion settings.
    pub fn tangle(&self, ctx: &Context, root: &ChunkName) -> Result<Tangled> {
        ctx.expander(&self.chunks).tangle(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::io::VirtualFS;
    use std::sync::Arc;

    fn virtual_context(files: &[(&str, &str)]) -> Context {
        let vfs = VirtualFS::new();
        for (path, content) in files {
            vfs.add_file(*path, *content);
        }
        Context::with_file_cache(Config::default(), PathBuf::from("."), Arc::new(vfs))
    }

    #[test]
    fn test_load_and_roots() {
        let ctx = virtual_context(&[(
            "book.md",
            "\n```a.txt\n@{b}\n```\n\n```b\nB\n```\n\n```c.txt\nC\n```\n",
        )]);
        let doc = Document::load(&ctx, Path::new("book.md")).unwrap();

        let roots: Vec<_> = doc.roots().into_iter().map(ChunkName::as_str).collect();
        assert_eq!(roots, vec!["a.txt", "c.txt"]);
        assert_eq!(doc.path, PathBuf::from("book.md"));
    }

    #[test]
    fn test_tangle_uses_context_settings() {
        let ctx = virtual_context(&[("book.md", "\n```out\n@{a}\n```\n\n```a\n@{a}\n```\n")]);
        let doc = Document::load(&ctx, Path::new("book.md")).unwrap();

        let result = doc.tangle(&ctx, &ChunkName::new("out"));
        assert!(matches!(result, Err(ViscondeError::CycleDetected(_))));
    }

    #[test]
    fn test_load_missing_document() {
        let ctx = virtual_context(&[]);
        let result = Document::load(&ctx, Path::new("absent.md"));
        match result {
            Err(ViscondeError::Read { path, .. }) => assert_eq!(path, PathBuf::from("absent.md")),
            other => panic!("expected read error, got {:?}", other),
        }
    }
}
