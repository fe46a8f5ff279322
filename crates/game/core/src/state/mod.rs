//! Authoritative game state representation.
//!
//! This module owns the snapshot the engine transitions: inventory, coins,
//! placed collectibles, buds, the avatar and the resource-node collections.
//! Callers hold snapshots by value and never mutate them in place; the engine
//! clones before applying an action.
pub mod types;

pub use types::{
    Bud, BudAura, BudId, BudStem, Buds, Bumpkin, Collectibles, Consumable, Coordinates, Duration,
    Inventory, ItemCategory, ItemName, MAX_BUMPKIN_LEVEL, NodeYield, PlacedCollectible, Quantity,
    ResourceNode, ResourceNodeKind, ResourceNodes, Timestamp, ToolRecipe, bumpkin_level,
    experience_for_level,
};

/// Canonical snapshot of one player's farm.
///
/// Missing collections deserialize as empty so partial snapshots load.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameState {
    /// Currency spent on crafting.
    pub coins: Quantity,
    pub inventory: Inventory,
    pub collectibles: Collectibles,
    /// Absent for players that never owned a bud.
    pub buds: Option<Buds>,
    /// Absent until the player creates an avatar.
    pub bumpkin: Option<Bumpkin>,

    pub stones: ResourceNodes,
    pub iron: ResourceNodes,
    pub gold: ResourceNodes,
    pub trees: ResourceNodes,
}

impl GameState {
    /// Creates an empty farm with no avatar.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an empty farm with a fresh avatar.
    pub fn with_bumpkin() -> Self {
        Self {
            bumpkin: Some(Bumpkin::new()),
            ..Self::default()
        }
    }

    /// Node collection for `kind`.
    pub fn nodes(&self, kind: ResourceNodeKind) -> &ResourceNodes {
        match kind {
            ResourceNodeKind::Stone => &self.stones,
            ResourceNodeKind::Iron => &self.iron,
            ResourceNodeKind::Gold => &self.gold,
            ResourceNodeKind::Tree => &self.trees,
        }
    }

    pub fn nodes_mut(&mut self, kind: ResourceNodeKind) -> &mut ResourceNodes {
        match kind {
            ResourceNodeKind::Stone => &mut self.stones,
            ResourceNodeKind::Iron => &mut self.iron,
            ResourceNodeKind::Gold => &mut self.gold,
            ResourceNodeKind::Tree => &mut self.trees,
        }
    }

    /// Number of placed instances of `name`.
    pub fn placed_count(&self, name: ItemName) -> usize {
        self.collectibles.get(&name).map(Vec::len).unwrap_or(0)
    }

    /// Whether any collectible placement already uses `id`.
    pub fn has_placement_id(&self, id: &str) -> bool {
        self.collectibles
            .values()
            .flatten()
            .any(|placement| placement.id == id)
    }

    /// Deterministic SHA-256 fingerprint of the snapshot.
    ///
    /// Two snapshots with equal contents always produce the same digest, which
    /// lets replay audits compare outcomes without diffing whole states.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self)?;
        Ok(Sha256::digest(&bytes).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_mut_targets_matching_collection() {
        let mut state = GameState::with_bumpkin();
        state
            .nodes_mut(ResourceNodeKind::Gold)
            .insert("0".into(), ResourceNode::fresh(Quantity::new(2)));

        assert!(state.gold.contains_key("0"));
        assert!(state.nodes(ResourceNodeKind::Stone).is_empty());
        assert_eq!(state.nodes(ResourceNodeKind::Gold).len(), 1);
    }

    #[test]
    fn placement_ids_are_searched_across_collectibles() {
        let mut state = GameState::empty();
        state.collectibles.insert(
            ItemName::Gnome,
            vec![PlacedCollectible::built(
                "gnome-1",
                Coordinates::new(1, 2),
                Timestamp(0),
            )],
        );

        assert!(state.has_placement_id("gnome-1"));
        assert!(!state.has_placement_id("totem-1"));
        assert_eq!(state.placed_count(ItemName::Gnome), 1);
        assert_eq!(state.placed_count(ItemName::Observatory), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn digest_is_stable_and_content_sensitive() {
        let state = GameState::with_bumpkin();
        let same = state.clone();
        assert_eq!(state.digest().unwrap(), same.digest().unwrap());

        let mut changed = state.clone();
        changed.coins = Quantity::new(1);
        assert_ne!(state.digest().unwrap(), changed.digest().unwrap());
    }
}
