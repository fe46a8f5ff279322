use crate::state::{Collectibles, ItemName, PlacedCollectible, Timestamp};

/// Whether a single placement has finished construction as of `now`.
pub fn is_collectible_built(placement: &PlacedCollectible, now: Timestamp) -> bool {
    placement.is_built(now)
}

/// True if at least one placed instance of `name` is built as of `now`.
pub fn is_collectible_active(name: ItemName, collectibles: &Collectibles, now: Timestamp) -> bool {
    collectibles
        .get(&name)
        .is_some_and(|placements| placements.iter().any(|p| is_collectible_built(p, now)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Coordinates;

    fn collectibles_with(name: ItemName, ready_at: Timestamp) -> Collectibles {
        Collectibles::from([(
            name,
            vec![PlacedCollectible::new(
                "1",
                Coordinates::ORIGIN,
                Timestamp(0),
                ready_at,
            )],
        )])
    }

    #[test]
    fn inactive_when_never_placed() {
        assert!(!is_collectible_active(
            ItemName::TimeWarpTotem,
            &Collectibles::new(),
            Timestamp(10)
        ));
    }

    #[test]
    fn inactive_while_under_construction() {
        let collectibles = collectibles_with(ItemName::Observatory, Timestamp(1_000));
        assert!(!is_collectible_active(ItemName::Observatory, &collectibles, Timestamp(999)));
        assert!(is_collectible_active(ItemName::Observatory, &collectibles, Timestamp(1_000)));
    }

    #[test]
    fn empty_placement_list_is_inactive() {
        let collectibles = Collectibles::from([(ItemName::Gnome, Vec::new())]);
        assert!(!is_collectible_active(ItemName::Gnome, &collectibles, Timestamp(5)));
    }

    #[test]
    fn one_built_instance_is_enough() {
        let mut collectibles = collectibles_with(ItemName::Observatory, Timestamp(9_000));
        collectibles
            .get_mut(&ItemName::Observatory)
            .unwrap()
            .push(PlacedCollectible::built("2", Coordinates::new(3, 3), Timestamp(10)));

        assert!(is_collectible_active(ItemName::Observatory, &collectibles, Timestamp(100)));
    }
}
