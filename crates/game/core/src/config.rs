use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::state::{Duration, ItemName, Quantity, ResourceNodeKind};

/// Timing and yield rules for one node family.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRules {
    /// Minimum time between two harvests of the same node.
    pub recovery: Duration,
    /// Yield a node holds again right after being harvested.
    pub regenerated_amount: Quantity,
    /// Share of `recovery` the boost collectible shaves off the stored harvest time.
    pub boost_fraction: Decimal,
}

impl NodeRules {
    pub fn new(recovery: Duration, regenerated_amount: Quantity) -> Self {
        Self {
            recovery,
            regenerated_amount,
            boost_fraction: GameConfig::DEFAULT_BOOST_FRACTION,
        }
    }

    /// Offset subtracted from the harvest time while the boost is active.
    pub fn boost_offset(&self) -> Duration {
        self.recovery.scaled(self.boost_fraction)
    }

    /// Effective wait between harvests while the boost stays active.
    pub fn boosted_recovery(&self) -> Duration {
        self.recovery.saturating_sub(self.boost_offset())
    }
}

/// Game rules constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    pub stone: NodeRules,
    pub iron: NodeRules,
    pub gold: NodeRules,
    pub tree: NodeRules,
    /// Construction time per collectible; unlisted collectibles build instantly.
    pub build_durations: BTreeMap<ItemName, Duration>,
}

impl GameConfig {
    // ===== default rule values =====
    pub const STONE_RECOVERY: Duration = Duration::from_hours(4);
    pub const IRON_RECOVERY: Duration = Duration::from_hours(8);
    pub const GOLD_RECOVERY: Duration = Duration::from_hours(24);
    pub const TREE_RECOVERY: Duration = Duration::from_hours(2);

    pub const ROCK_REGENERATED_AMOUNT: u64 = 2;
    pub const TREE_REGENERATED_AMOUNT: u64 = 3;

    /// Time Warp Totem halves the effective wait.
    pub const DEFAULT_BOOST_FRACTION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

    pub const OBSERVATORY_BUILD: Duration = Duration::from_hours(1);

    pub fn new() -> Self {
        Self {
            stone: NodeRules::new(
                Self::STONE_RECOVERY,
                Quantity::new(Self::ROCK_REGENERATED_AMOUNT),
            ),
            iron: NodeRules::new(
                Self::IRON_RECOVERY,
                Quantity::new(Self::ROCK_REGENERATED_AMOUNT),
            ),
            gold: NodeRules::new(
                Self::GOLD_RECOVERY,
                Quantity::new(Self::ROCK_REGENERATED_AMOUNT),
            ),
            tree: NodeRules::new(
                Self::TREE_RECOVERY,
                Quantity::new(Self::TREE_REGENERATED_AMOUNT),
            ),
            build_durations: BTreeMap::from([(ItemName::Observatory, Self::OBSERVATORY_BUILD)]),
        }
    }

    pub fn node_rules(&self, kind: ResourceNodeKind) -> &NodeRules {
        match kind {
            ResourceNodeKind::Stone => &self.stone,
            ResourceNodeKind::Iron => &self.iron,
            ResourceNodeKind::Gold => &self.gold,
            ResourceNodeKind::Tree => &self.tree,
        }
    }

    pub fn node_rules_mut(&mut self, kind: ResourceNodeKind) -> &mut NodeRules {
        match kind {
            ResourceNodeKind::Stone => &mut self.stone,
            ResourceNodeKind::Iron => &mut self.iron,
            ResourceNodeKind::Gold => &mut self.gold,
            ResourceNodeKind::Tree => &mut self.tree,
        }
    }

    pub fn build_duration(&self, name: ItemName) -> Duration {
        self.build_durations
            .get(&name)
            .copied()
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_boost_offset_is_half_recovery() {
        let config = GameConfig::default();
        assert_eq!(config.gold.boost_offset(), Duration::from_hours(12));
        assert_eq!(config.stone.boost_offset(), Duration::from_hours(2));
        assert_eq!(config.tree.boosted_recovery(), Duration::from_hours(1));
    }

    #[test]
    fn oversized_boost_never_underflows() {
        let mut rules = NodeRules::new(Duration::from_minutes(10), Quantity::ONE);
        rules.boost_fraction = Decimal::new(15, 1);
        assert_eq!(rules.boosted_recovery(), Duration::ZERO);
    }

    #[test]
    fn unlisted_collectibles_build_instantly() {
        let config = GameConfig::default();
        assert_eq!(config.build_duration(ItemName::Gnome), Duration::ZERO);
        assert_eq!(
            config.build_duration(ItemName::Observatory),
            GameConfig::OBSERVATORY_BUILD
        );
    }
}
