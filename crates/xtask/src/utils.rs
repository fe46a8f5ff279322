//! Utility functions for xtask commands

use std::path::Path;

use anyhow::Result;
use farm_content::ConfigLoader;
use farm_core::{Duration, GameConfig};

/// Rules from `path`, or the built-in rules when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading rules");
            ConfigLoader::load(path)
        }
        None => ConfigLoader::embedded(),
    }
}

/// Human-readable span, e.g. `3h 20m 5s`.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_millis() / 1_000;
    let (hours, minutes, secs) = (total_secs / 3_600, (total_secs % 3_600) / 60, total_secs % 60);

    match (hours, minutes) {
        (0, 0) => format!("{secs}s"),
        (0, _) => format!("{minutes}m {secs}s"),
        _ => format!("{hours}h {minutes}m {secs}s"),
    }
}
