//! Content loaders for reading game data from files.
//!
//! Every loader exposes a `parse`-style entry point over in-memory text and a
//! `load` wrapper that reads the file first, so tests can skip the disk.

pub mod actions;
pub mod config;
pub mod snapshot;

pub use actions::{ActionLoader, ActionScript, DescriptorError, ScriptStep};
pub use config::ConfigLoader;
pub use snapshot::{SnapshotFormat, SnapshotLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
