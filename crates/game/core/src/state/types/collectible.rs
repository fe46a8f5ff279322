//! Placed collectibles and buds, the two sources of boosts.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::{Coordinates, ItemName, Timestamp};

/// One placed instance of a collectible.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PlacedCollectible {
    pub id: String,
    pub coordinates: Coordinates,
    pub created_at: Timestamp,
    /// Construction finishes at this instant; the collectible is inactive before it.
    pub ready_at: Timestamp,
}

impl PlacedCollectible {
    pub fn new(
        id: impl Into<String>,
        coordinates: Coordinates,
        created_at: Timestamp,
        ready_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            coordinates,
            created_at,
            ready_at,
        }
    }

    /// Placement that finished building at `at`.
    pub fn built(id: impl Into<String>, coordinates: Coordinates, at: Timestamp) -> Self {
        Self::new(id, coordinates, at, at)
    }

    /// Whether construction has completed as of `now`.
    pub fn is_built(&self, now: Timestamp) -> bool {
        self.ready_at <= now
    }
}

/// Placed instances per collectible, in placement order.
pub type Collectibles = BTreeMap<ItemName, Vec<PlacedCollectible>>;

/// Identifier of a bud NFT.
pub type BudId = u32;

/// Buds owned by the player, keyed by id.
pub type Buds = BTreeMap<BudId, Bud>;

/// A bud companion. Only placed buds (with coordinates) grant boosts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bud {
    pub stem: BudStem,
    pub aura: BudAura,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub coordinates: Option<Coordinates>,
}

impl Bud {
    pub fn new(stem: BudStem, aura: BudAura) -> Self {
        Self {
            stem,
            aura,
            coordinates: None,
        }
    }

    pub fn placed_at(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn is_placed(&self) -> bool {
        self.coordinates.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BudStem {
    #[cfg_attr(feature = "serde", serde(rename = "Chef Hat"))]
    ChefHat,
    #[cfg_attr(feature = "serde", serde(rename = "Egg Head"))]
    EggHead,
    #[cfg_attr(feature = "serde", serde(rename = "Sunflower Hat"))]
    SunflowerHat,
    #[cfg_attr(feature = "serde", serde(rename = "3 Leaf Clover"))]
    ThreeLeafClover,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BudAura {
    #[cfg_attr(feature = "serde", serde(rename = "No Aura"))]
    NoAura,
    Basic,
    Green,
    Rare,
    Mythical,
}

impl BudAura {
    /// Factor applied to the bud's own boost.
    pub fn multiplier(self) -> Decimal {
        match self {
            BudAura::NoAura => Decimal::ONE,
            BudAura::Basic => Decimal::new(105, 2),
            BudAura::Green => Decimal::new(12, 1),
            BudAura::Rare => Decimal::TWO,
            BudAura::Mythical => Decimal::from(5),
        }
    }
}
