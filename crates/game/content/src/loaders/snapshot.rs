//! Farm snapshot loader.
//!
//! Snapshots are plain `GameState` documents. JSON is the exchange format;
//! RON is accepted for hand-written fixtures.

use std::path::Path;

use anyhow::Context;
use farm_core::GameState;

use crate::loaders::{LoadResult, read_file};

/// On-disk encoding of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Ron,
}

impl SnapshotFormat {
    /// Picks the format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => SnapshotFormat::Ron,
            _ => SnapshotFormat::Json,
        }
    }
}

/// Loader for farm snapshots.
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load a snapshot, choosing the format from the file extension.
    pub fn load(path: &Path) -> LoadResult<GameState> {
        let content = read_file(path)?;
        Self::parse(&content, SnapshotFormat::from_path(path))
            .with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str, format: SnapshotFormat) -> LoadResult<GameState> {
        let state = match format {
            SnapshotFormat::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse snapshot JSON: {}", e))?,
            SnapshotFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse snapshot RON: {}", e))?,
        };

        Ok(state)
    }

    /// Pretty-printed JSON for a snapshot.
    pub fn to_json(state: &GameState) -> LoadResult<String> {
        serde_json::to_string_pretty(state).context("Failed to serialize snapshot")
    }

    /// Writes a snapshot as pretty JSON.
    pub fn save(state: &GameState, path: &Path) -> LoadResult<()> {
        let json = Self::to_json(state)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))
    }
}
