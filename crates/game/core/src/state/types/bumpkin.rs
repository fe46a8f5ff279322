//! The player avatar.

use crate::activity::ActivityMap;

use super::Quantity;

/// Experience required to reach each level, starting at level 1.
const LEVEL_THRESHOLDS: [u32; 20] = [
    0, 5, 15, 30, 50, 80, 120, 200, 300, 400, 500, 650, 800, 1000, 1250, 1500, 1800, 2100, 2500,
    3000,
];

/// Highest level reachable through experience.
pub const MAX_BUMPKIN_LEVEL: u8 = LEVEL_THRESHOLDS.len() as u8;

/// Player avatar: experience plus the activity counters that feed progression.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Bumpkin {
    pub experience: Quantity,
    pub activity: ActivityMap,
}

impl Bumpkin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_experience(experience: Quantity) -> Self {
        Self {
            experience,
            activity: ActivityMap::new(),
        }
    }

    /// Count recorded for `activity`, zero if it never happened.
    pub fn activity_count(&self, activity: &str) -> u64 {
        self.activity.get(activity).copied().unwrap_or(0)
    }

    pub fn level(&self) -> u8 {
        bumpkin_level(self.experience)
    }
}

/// Level for a given amount of experience. Pure function of `experience`.
pub fn bumpkin_level(experience: Quantity) -> u8 {
    LEVEL_THRESHOLDS
        .iter()
        .rposition(|threshold| experience >= Quantity::from(*threshold))
        .map(|index| index as u8 + 1)
        .unwrap_or(1)
}

/// Experience at which `level` starts, `None` past the table.
pub fn experience_for_level(level: u8) -> Option<Quantity> {
    let index = usize::from(level.checked_sub(1)?);
    LEVEL_THRESHOLDS.get(index).map(|xp| Quantity::from(*xp))
}
