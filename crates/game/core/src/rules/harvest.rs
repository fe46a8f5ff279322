//! Recovery timing for resource nodes.

use crate::config::NodeRules;
use crate::state::{Collectibles, Duration, NodeYield, ResourceNodeKind, Timestamp};

use super::collectibles::is_collectible_active;

/// Whether a node may be harvested at `now`.
///
/// Eligible once `now - harvested_at >= recovery`; the boundary itself counts.
/// A never-harvested node is always eligible, whatever `now` is.
pub fn can_harvest(stock: &NodeYield, recovery: Duration, now: Timestamp) -> bool {
    match stock.harvested_at {
        None => true,
        Some(harvested_at) => now.since(harvested_at) >= recovery,
    }
}

/// Timestamp to store as the node's new `harvested_at`.
///
/// While the node kind's boost collectible is active at `reference_time`, the
/// stamp is moved back by `recovery * boost_fraction`. The shift is persisted
/// rather than applied at read time, so later eligibility checks need no
/// knowledge of which boosts were active at harvest.
pub fn boosted_harvested_at(
    kind: ResourceNodeKind,
    rules: &NodeRules,
    reference_time: Timestamp,
    collectibles: &Collectibles,
) -> Timestamp {
    if is_collectible_active(kind.boost_collectible(), collectibles, reference_time) {
        reference_time.saturating_sub(rules.boost_offset())
    } else {
        reference_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Coordinates, ItemName, PlacedCollectible, Quantity};

    const NOW: Timestamp = Timestamp(1_700_000_000_000);

    fn harvested_at(at: Timestamp) -> NodeYield {
        NodeYield::new(Quantity::new(2), at)
    }

    fn totem_placed_at(at: Timestamp) -> Collectibles {
        Collectibles::from([(
            ItemName::TimeWarpTotem,
            vec![PlacedCollectible::built("totem", Coordinates::ORIGIN, at)],
        )])
    }

    #[test]
    fn boundary_is_inclusive() {
        let recovery = Duration::from_hours(4);
        let stock = harvested_at(Timestamp(NOW.0 - recovery.as_millis()));

        assert!(can_harvest(&stock, recovery, NOW));
        assert!(!can_harvest(&stock, recovery, Timestamp(NOW.0 - 1)));
    }

    #[test]
    fn fresh_node_is_eligible() {
        let stock = NodeYield::fresh(Quantity::new(2));
        assert!(can_harvest(&stock, GameConfig::GOLD_RECOVERY, NOW));
    }

    #[test]
    fn fresh_node_is_eligible_before_one_recovery_has_elapsed() {
        let stock = NodeYield::fresh(Quantity::new(2));
        assert!(can_harvest(&stock, GameConfig::STONE_RECOVERY, Timestamp::ZERO));
        assert!(can_harvest(&stock, GameConfig::STONE_RECOVERY, Timestamp(1_000)));

        // Harvested at the epoch is not the same as never harvested.
        let stamped = harvested_at(Timestamp::ZERO);
        assert!(!can_harvest(&stamped, GameConfig::STONE_RECOVERY, Timestamp(1_000)));
    }

    #[test]
    fn harvest_stamp_in_future_is_not_eligible() {
        let stock = harvested_at(Timestamp(NOW.0 + 10));
        assert!(!can_harvest(&stock, Duration::from_millis(1), NOW));
    }

    #[test]
    fn unboosted_stamp_equals_reference_time() {
        let config = GameConfig::default();
        let stamp = boosted_harvested_at(
            ResourceNodeKind::Gold,
            &config.gold,
            NOW,
            &Collectibles::new(),
        );
        assert_eq!(stamp, NOW);
    }

    #[test]
    fn active_totem_shifts_stamp_by_half_recovery() {
        let config = GameConfig::default();
        let stamp = boosted_harvested_at(
            ResourceNodeKind::Gold,
            &config.gold,
            NOW,
            &totem_placed_at(Timestamp(0)),
        );
        assert_eq!(stamp, NOW - Duration::from_hours(12));
    }

    #[test]
    fn totem_still_building_does_not_shift() {
        let config = GameConfig::default();
        let collectibles = Collectibles::from([(
            ItemName::TimeWarpTotem,
            vec![PlacedCollectible::new(
                "totem",
                Coordinates::ORIGIN,
                NOW,
                Timestamp(NOW.0 + 1),
            )],
        )]);
        let stamp =
            boosted_harvested_at(ResourceNodeKind::Stone, &config.stone, NOW, &collectibles);
        assert_eq!(stamp, NOW);
    }

    #[test]
    fn shifted_stamp_saturates_at_epoch() {
        let config = GameConfig::default();
        let early = Timestamp(1_000);
        let stamp = boosted_harvested_at(
            ResourceNodeKind::Tree,
            &config.tree,
            early,
            &totem_placed_at(Timestamp(0)),
        );
        assert_eq!(stamp, Timestamp::ZERO);
    }
}
