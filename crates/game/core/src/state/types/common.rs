use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Logical instant expressed in epoch milliseconds.
///
/// Every timing rule compares against a `Timestamp` handed in by the caller;
/// nothing below the engine boundary reads the wall clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// The epoch. Freshly created resource nodes carry this as their last harvest.
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Reads the wall clock.
    ///
    /// Only the engine boundary calls this, and only when the caller omitted
    /// `created_at`. Replays and tests always pass the timestamp explicitly.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        Self(millis)
    }

    /// Time elapsed since `earlier`. A reading earlier than `earlier` counts as zero.
    pub const fn since(self, earlier: Timestamp) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// Shifts this instant back in time, saturating at the epoch.
    pub const fn saturating_sub(self, offset: Duration) -> Self {
        Self(self.0.saturating_sub(offset.0))
    }

    pub const fn saturating_add(self, offset: Duration) -> Self {
        Self(self.0.saturating_add(offset.0))
    }
}

impl std::ops::Add<Duration> for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp(self.0 + rhs.0)
    }
}

impl std::ops::Sub<Duration> for Timestamp {
    type Output = Timestamp;
    fn sub(self, rhs: Duration) -> Timestamp {
        Timestamp(self.0 - rhs.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Span of time in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Duration(pub u64);

impl Duration {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self(secs * 1000)
    }

    pub const fn from_minutes(minutes: u64) -> Self {
        Self::from_secs(minutes * 60)
    }

    pub const fn from_hours(hours: u64) -> Self {
        Self::from_minutes(hours * 60)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    pub const fn saturating_sub(self, other: Duration) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Scales the span by an exact decimal factor, truncating to whole milliseconds.
    ///
    /// Negative factors yield [`Duration::ZERO`].
    pub fn scaled(self, factor: Decimal) -> Self {
        let millis = (Decimal::from(self.0) * factor)
            .trunc()
            .to_u64()
            .unwrap_or_default();
        Self(millis)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Grid placement of a node, collectible or bud on the player's land.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
