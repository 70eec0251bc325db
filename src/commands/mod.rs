//! Command implementations.

mod tangle;

pub use tangle::{
    banner, missing_chunk_warning, tangle, tangle_to, would_write_file, writing_file,
    TangleOptions, TangleReport, DONE,
};
