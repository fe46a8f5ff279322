pub mod bumpkin;
pub mod collectible;
pub mod common;
pub mod inventory;
pub mod item;
pub mod node;
pub mod quantity;

// Re-export avatar types
pub use bumpkin::{Bumpkin, MAX_BUMPKIN_LEVEL, bumpkin_level, experience_for_level};

// Re-export boost sources
pub use collectible::{Bud, BudAura, BudId, BudStem, Buds, Collectibles, PlacedCollectible};

// Re-export common types
pub use common::{Coordinates, Duration, Timestamp};

// Re-export inventory and item catalog
pub use inventory::Inventory;
pub use item::{Consumable, ItemCategory, ItemName, ToolRecipe};

// Re-export resource nodes
pub use node::{NodeYield, ResourceNode, ResourceNodeKind, ResourceNodes};

// Re-export numeric resource type
pub use quantity::Quantity;
