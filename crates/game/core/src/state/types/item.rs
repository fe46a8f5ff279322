//! Closed catalog of inventory item identifiers and their static properties.

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::Quantity;

/// Every item that can appear as an inventory or collectible key.
///
/// The string form (used for serialization, activity names and messages) is
/// the in-game display name, e.g. `"Iron Pickaxe"`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum ItemName {
    // ========================================================================
    // Resources
    // ========================================================================
    Wood,
    Stone,
    Iron,
    Gold,

    // ========================================================================
    // Tools
    // ========================================================================
    Axe,
    Pickaxe,
    #[strum(serialize = "Stone Pickaxe")]
    StonePickaxe,
    #[strum(serialize = "Iron Pickaxe")]
    IronPickaxe,
    #[strum(serialize = "Gold Pickaxe")]
    GoldPickaxe,

    // ========================================================================
    // Food
    // ========================================================================
    #[strum(serialize = "Mashed Potato")]
    MashedPotato,
    #[strum(serialize = "Pumpkin Soup")]
    PumpkinSoup,
    #[strum(serialize = "Sunflower Crunch")]
    SunflowerCrunch,
    #[strum(serialize = "Boiled Eggs")]
    BoiledEggs,
    #[strum(serialize = "Bumpkin Broth")]
    BumpkinBroth,
    #[strum(serialize = "Bumpkin Salad")]
    BumpkinSalad,
    #[strum(serialize = "Kale Stew")]
    KaleStew,

    // ========================================================================
    // Collectibles
    // ========================================================================
    #[strum(serialize = "Time Warp Totem")]
    TimeWarpTotem,
    Observatory,
    Gnome,
}

/// Broad grouping used by handlers to reject nonsensical requests early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    Resource,
    Tool,
    Food,
    Collectible,
}

/// Static food definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Consumable {
    pub name: ItemName,
    /// Experience granted per unit eaten, before boosts.
    pub experience: u32,
}

/// Coin price and per-unit ingredients for a craftable tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolRecipe {
    pub tool: ItemName,
    pub price: u32,
    pub ingredients: &'static [(ItemName, u32)],
}

impl ToolRecipe {
    pub fn price(&self) -> Quantity {
        Quantity::from(self.price)
    }
}

impl ItemName {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn category(self) -> ItemCategory {
        use ItemName::*;
        match self {
            Wood | Stone | Iron | Gold => ItemCategory::Resource,
            Axe | Pickaxe | StonePickaxe | IronPickaxe | GoldPickaxe => ItemCategory::Tool,
            MashedPotato | PumpkinSoup | SunflowerCrunch | BoiledEggs | BumpkinBroth
            | BumpkinSalad | KaleStew => ItemCategory::Food,
            TimeWarpTotem | Observatory | Gnome => ItemCategory::Collectible,
        }
    }

    /// Food definition, or `None` if the item cannot be eaten.
    pub const fn consumable(self) -> Option<Consumable> {
        use ItemName::*;
        let experience = match self {
            MashedPotato => 3,
            PumpkinSoup => 24,
            SunflowerCrunch => 50,
            BoiledEggs => 90,
            BumpkinBroth => 96,
            BumpkinSalad => 290,
            KaleStew => 400,
            _ => return None,
        };
        Some(Consumable {
            name: self,
            experience,
        })
    }

    /// Crafting recipe, or `None` if the item is not a craftable tool.
    pub const fn recipe(self) -> Option<ToolRecipe> {
        use ItemName::*;
        let (price, ingredients): (u32, &'static [(ItemName, u32)]) = match self {
            Axe => (20, &[]),
            Pickaxe => (20, &[(Wood, 3)]),
            StonePickaxe => (20, &[(Wood, 3), (Stone, 5)]),
            IronPickaxe => (80, &[(Wood, 3), (Iron, 5)]),
            GoldPickaxe => (100, &[(Wood, 3), (Gold, 3)]),
            _ => return None,
        };
        Some(ToolRecipe {
            tool: self,
            price,
            ingredients,
        })
    }

    pub const fn is_placeable(self) -> bool {
        matches!(self.category(), ItemCategory::Collectible)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ItemName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ItemName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let name = String::deserialize(deserializer)?;
        name.parse()
            .map_err(|_| D::Error::custom(format!("unknown item name `{name}`")))
    }
}
