//! Harvestable resource nodes: rocks and trees.

use std::collections::BTreeMap;

use super::{Coordinates, ItemName, Quantity, Timestamp};

/// Node collection keyed by the node's index string.
pub type ResourceNodes = BTreeMap<String, ResourceNode>;

/// The four harvestable node families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceNodeKind {
    Stone,
    Iron,
    Gold,
    Tree,
}

impl ResourceNodeKind {
    pub const ALL: [ResourceNodeKind; 4] = [
        ResourceNodeKind::Stone,
        ResourceNodeKind::Iron,
        ResourceNodeKind::Gold,
        ResourceNodeKind::Tree,
    ];

    /// Tool consumed by one harvest.
    pub const fn tool(self) -> ItemName {
        match self {
            ResourceNodeKind::Stone => ItemName::Pickaxe,
            ResourceNodeKind::Iron => ItemName::StonePickaxe,
            ResourceNodeKind::Gold => ItemName::IronPickaxe,
            ResourceNodeKind::Tree => ItemName::Axe,
        }
    }

    /// Resource credited to the inventory.
    pub const fn output(self) -> ItemName {
        match self {
            ResourceNodeKind::Stone => ItemName::Stone,
            ResourceNodeKind::Iron => ItemName::Iron,
            ResourceNodeKind::Gold => ItemName::Gold,
            ResourceNodeKind::Tree => ItemName::Wood,
        }
    }

    /// Collectible that shifts the stored harvest time back when active.
    pub const fn boost_collectible(self) -> ItemName {
        ItemName::TimeWarpTotem
    }

    /// Activity counter bumped on every successful harvest.
    pub const fn activity(self) -> &'static str {
        match self {
            ResourceNodeKind::Stone => "Stone Mined",
            ResourceNodeKind::Iron => "Iron Mined",
            ResourceNodeKind::Gold => "Gold Mined",
            ResourceNodeKind::Tree => "Tree Chopped",
        }
    }

    pub const fn node_label(self) -> &'static str {
        match self {
            ResourceNodeKind::Stone => "rock",
            ResourceNodeKind::Iron => "iron rock",
            ResourceNodeKind::Gold => "gold rock",
            ResourceNodeKind::Tree => "tree",
        }
    }

    pub const fn recovering_message(self) -> &'static str {
        match self {
            ResourceNodeKind::Stone => "Rock is still recovering",
            ResourceNodeKind::Iron => "Iron is still recovering",
            ResourceNodeKind::Gold => "Gold is still recovering",
            ResourceNodeKind::Tree => "Tree is still growing",
        }
    }
}

/// Stored yield of a node and when it was last harvested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NodeYield {
    pub amount: Quantity,
    /// `None` until the first harvest. May lie before the real harvest time
    /// when a boost was active.
    #[cfg_attr(feature = "serde", serde(default))]
    pub harvested_at: Option<Timestamp>,
}

impl NodeYield {
    pub fn new(amount: Quantity, harvested_at: Timestamp) -> Self {
        Self {
            amount,
            harvested_at: Some(harvested_at),
        }
    }

    /// Yield of a node that has never been harvested.
    pub fn fresh(amount: Quantity) -> Self {
        Self {
            amount,
            harvested_at: None,
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.harvested_at.is_none()
    }
}

/// A rock or tree placed on the land.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceNode {
    pub coordinates: Coordinates,
    pub stock: NodeYield,
}

impl ResourceNode {
    pub fn new(coordinates: Coordinates, stock: NodeYield) -> Self {
        Self { coordinates, stock }
    }

    /// Never-harvested node holding `amount`.
    pub fn fresh(amount: Quantity) -> Self {
        Self::new(Coordinates::ORIGIN, NodeYield::fresh(amount))
    }
}
