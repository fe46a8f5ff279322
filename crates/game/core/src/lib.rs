//! Deterministic action processing for the farming game.
//!
//! `farm-core` defines the canonical rules (actions, engine, farm state) and
//! exposes pure APIs that can be reused by servers and offline tools alike.
//! All state mutation flows through [`engine::GameEngine`]: callers hand in a
//! snapshot, an [`Action`] and a timestamp, and get back either the successor
//! snapshot or a typed [`ExecuteError`].
pub mod action;
pub mod activity;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod state;

pub use action::{
    Action, ActionError, ActionKind, ActionTransition, CraftToolAction, FeedBumpkinAction,
    HarvestAction, HarvestCommand, PlaceCollectibleAction, TransitionContext,
};
pub use activity::{ActivityMap, track_activity, track_activity_by};
pub use config::{GameConfig, NodeRules};
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use error::{ErrorSeverity, GameError};
pub use rules::{
    boosted_harvested_at, can_harvest, food_experience, food_experience_boost,
    is_collectible_active, is_collectible_built,
};
pub use state::{
    Bud, BudAura, BudId, BudStem, Buds, Bumpkin, Collectibles, Coordinates, Duration, GameState,
    Inventory, ItemName, NodeYield, PlacedCollectible, Quantity, ResourceNode, ResourceNodeKind,
    ResourceNodes, Timestamp,
};
