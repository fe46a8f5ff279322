//! Data-driven content and loaders for the farm engine.
//!
//! This crate turns files into the values `farm-core` operates on:
//! - Game rules (`GameConfig`) from TOML
//! - Farm snapshots (`GameState`) from JSON or RON
//! - Action descriptors and replay scripts from JSON
//!
//! Content never appears in the engine itself; callers load it here and hand
//! plain values to `GameEngine`.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActionLoader, ActionScript, ConfigLoader, DescriptorError, ScriptStep, SnapshotFormat,
    SnapshotLoader,
};
