//! File access for reading documents and writing tangled outputs.

mod file_cache;

pub use file_cache::{FileCache, RealFileCache, VirtualFS};
