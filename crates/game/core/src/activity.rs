//! Per-avatar activity counters.
//!
//! Every handler that contributes to progression records its success here,
//! e.g. `"Gold Mined"` or `"Boiled Eggs Fed"`. Achievements and leveling read
//! these counters outside the core.

use std::collections::BTreeMap;

/// Activity name to number of times it happened.
pub type ActivityMap = BTreeMap<String, u64>;

/// Returns a copy of `activity` with `name` incremented by one.
pub fn track_activity(name: &str, activity: &ActivityMap) -> ActivityMap {
    track_activity_by(name, activity, 1)
}

/// Returns a copy of `activity` with `name` incremented by `amount`.
///
/// Absent counters start at zero, so the first call sets them to `amount`.
pub fn track_activity_by(name: &str, activity: &ActivityMap, amount: u64) -> ActivityMap {
    let mut next = activity.clone();
    let count = next.entry(name.to_owned()).or_insert(0);
    *count = count.saturating_add(amount);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_missing_counter_to_one() {
        let activity = ActivityMap::new();
        let next = track_activity("Gold Mined", &activity);

        assert_eq!(next.get("Gold Mined"), Some(&1));
        assert!(activity.is_empty());
    }

    #[test]
    fn increments_existing_counter_only() {
        let activity = ActivityMap::from([("Gold Mined".to_owned(), 4), ("Tree Chopped".to_owned(), 2)]);
        let next = track_activity("Gold Mined", &activity);

        assert_eq!(next.get("Gold Mined"), Some(&5));
        assert_eq!(next.get("Tree Chopped"), Some(&2));
        assert_eq!(activity.get("Gold Mined"), Some(&4));
    }

    #[test]
    fn tracks_by_amount() {
        let next = track_activity_by("Coins Spent", &ActivityMap::new(), 80);
        let next = track_activity_by("Coins Spent", &next, 20);
        assert_eq!(next.get("Coins Spent"), Some(&100));
    }
}
