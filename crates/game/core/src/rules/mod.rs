//! Shared eligibility predicates.
//!
//! Pure functions answering "can this node be harvested now?" and "is this
//! boost active?". Every time-dependent check takes its reference timestamp
//! as an argument; none of them read a clock.

pub mod boosts;
pub mod collectibles;
pub mod harvest;

pub use boosts::{food_experience, food_experience_boost};
pub use collectibles::{is_collectible_active, is_collectible_built};
pub use harvest::{boosted_harvested_at, can_harvest};
