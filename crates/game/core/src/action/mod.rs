//! Action domain - one transition per action type.
//!
//! # Module Structure
//!
//! - `error`: the shared failure taxonomy ([`ActionError`])
//! - `kinds`: concrete transitions (harvest, feed, craft, place)
//!
//! An [`Action`] is pure data: the discriminant plus its payload. The engine
//! turns each variant into its [`ActionTransition`] and drives it against a
//! cloned snapshot.

pub mod error;
pub mod kinds;

pub use error::ActionError;
pub use kinds::{
    CraftToolAction, FeedBumpkinAction, HarvestAction, HarvestCommand, PlaceCollectibleAction,
};

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::config::GameConfig;
use crate::state::{GameState, ResourceNodeKind, Timestamp};

/// Read-only facts available to every transition phase.
#[derive(Clone, Copy, Debug)]
pub struct TransitionContext<'a> {
    pub config: &'a GameConfig,
    /// Logical time of the action; the only clock a handler ever sees.
    pub created_at: Timestamp,
}

impl<'a> TransitionContext<'a> {
    pub fn new(config: &'a GameConfig, created_at: Timestamp) -> Self {
        Self { config, created_at }
    }
}

/// Defines how a concrete action variant validates and mutates the snapshot.
///
/// The engine runs the three hooks in order against a private clone of the
/// caller's snapshot and discards the clone if any hook fails, so `apply` may
/// assume `pre_validate` passed without worrying about partial writes.
pub trait ActionTransition {
    /// Discriminant of the action this transition implements.
    fn kind(&self) -> ActionKind;

    /// Validates pre-conditions using the state **before** mutation.
    ///
    /// Checks run in a fixed order; the first failure is the reported error.
    fn pre_validate(
        &self,
        _state: &GameState,
        _ctx: &TransitionContext<'_>,
    ) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, ctx: &TransitionContext<'_>)
    -> Result<(), ActionError>;

    /// Validates post-conditions using the state **after** mutation.
    ///
    /// By default rejects a negative inventory entry or coin balance.
    fn post_validate(
        &self,
        state: &GameState,
        _ctx: &TransitionContext<'_>,
    ) -> Result<(), ActionError> {
        ensure_non_negative(state)
    }
}

/// Fails if any inventory entry or the coin balance is negative.
pub fn ensure_non_negative(state: &GameState) -> Result<(), ActionError> {
    if let Some(item) = state.inventory.first_negative() {
        return Err(ActionError::NegativeQuantity { item });
    }
    if state.coins.is_negative() {
        return Err(ActionError::NegativeCoins);
    }
    Ok(())
}

/// Closed set of action discriminants.
///
/// The string form is the wire discriminant (`"goldRock.mined"`); parsing an
/// unrecognised string yields [`ActionError::UnknownAction`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    #[strum(serialize = "stone.mined")]
    #[cfg_attr(feature = "serde", serde(rename = "stone.mined"))]
    MineStone,

    #[strum(serialize = "ironRock.mined")]
    #[cfg_attr(feature = "serde", serde(rename = "ironRock.mined"))]
    MineIron,

    #[strum(serialize = "goldRock.mined")]
    #[cfg_attr(feature = "serde", serde(rename = "goldRock.mined"))]
    MineGold,

    #[strum(serialize = "timber.chopped")]
    #[cfg_attr(feature = "serde", serde(rename = "timber.chopped"))]
    ChopTree,

    #[strum(serialize = "bumpkin.feed")]
    #[cfg_attr(feature = "serde", serde(rename = "bumpkin.feed"))]
    FeedBumpkin,

    #[strum(serialize = "tool.crafted")]
    #[cfg_attr(feature = "serde", serde(rename = "tool.crafted"))]
    CraftTool,

    #[strum(serialize = "collectible.placed")]
    #[cfg_attr(feature = "serde", serde(rename = "collectible.placed"))]
    PlaceCollectible,
}

impl ActionKind {
    /// Parses a wire discriminant.
    pub fn parse(name: &str) -> Result<Self, ActionError> {
        name.parse().map_err(|_| ActionError::UnknownAction {
            name: name.to_owned(),
        })
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Node family harvested by this action, if it is a harvest.
    pub const fn harvested_node(self) -> Option<ResourceNodeKind> {
        match self {
            ActionKind::MineStone => Some(ResourceNodeKind::Stone),
            ActionKind::MineIron => Some(ResourceNodeKind::Iron),
            ActionKind::MineGold => Some(ResourceNodeKind::Gold),
            ActionKind::ChopTree => Some(ResourceNodeKind::Tree),
            ActionKind::FeedBumpkin | ActionKind::CraftTool | ActionKind::PlaceCollectible => None,
        }
    }
}

impl ResourceNodeKind {
    /// Action that harvests this node family.
    pub const fn action_kind(self) -> ActionKind {
        match self {
            ResourceNodeKind::Stone => ActionKind::MineStone,
            ResourceNodeKind::Iron => ActionKind::MineIron,
            ResourceNodeKind::Gold => ActionKind::MineGold,
            ResourceNodeKind::Tree => ActionKind::ChopTree,
        }
    }
}

/// A requested state transition: discriminant plus payload, no behavior.
///
/// Serialized with the discriminant in a `"type"` field, e.g.
/// `{"type": "goldRock.mined", "index": "0"}`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
pub enum Action {
    #[cfg_attr(feature = "serde", serde(rename = "stone.mined"))]
    MineStone(HarvestCommand),

    #[cfg_attr(feature = "serde", serde(rename = "ironRock.mined"))]
    MineIron(HarvestCommand),

    #[cfg_attr(feature = "serde", serde(rename = "goldRock.mined"))]
    MineGold(HarvestCommand),

    #[cfg_attr(feature = "serde", serde(rename = "timber.chopped"))]
    ChopTree(HarvestCommand),

    #[cfg_attr(feature = "serde", serde(rename = "bumpkin.feed"))]
    FeedBumpkin(FeedBumpkinAction),

    #[cfg_attr(feature = "serde", serde(rename = "tool.crafted"))]
    CraftTool(CraftToolAction),

    #[cfg_attr(feature = "serde", serde(rename = "collectible.placed"))]
    PlaceCollectible(PlaceCollectibleAction),
}

impl Action {
    /// Harvest action for `kind` at node `index`.
    pub fn harvest(kind: ResourceNodeKind, index: impl Into<String>) -> Self {
        let command = HarvestCommand::new(index);
        match kind {
            ResourceNodeKind::Stone => Action::MineStone(command),
            ResourceNodeKind::Iron => Action::MineIron(command),
            ResourceNodeKind::Gold => Action::MineGold(command),
            ResourceNodeKind::Tree => Action::ChopTree(command),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::MineStone(_) => ActionKind::MineStone,
            Action::MineIron(_) => ActionKind::MineIron,
            Action::MineGold(_) => ActionKind::MineGold,
            Action::ChopTree(_) => ActionKind::ChopTree,
            Action::FeedBumpkin(_) => ActionKind::FeedBumpkin,
            Action::CraftTool(_) => ActionKind::CraftTool,
            Action::PlaceCollectible(_) => ActionKind::PlaceCollectible,
        }
    }
}

impl From<FeedBumpkinAction> for Action {
    fn from(action: FeedBumpkinAction) -> Self {
        Self::FeedBumpkin(action)
    }
}

impl From<CraftToolAction> for Action {
    fn from(action: CraftToolAction) -> Self {
        Self::CraftTool(action)
    }
}

impl From<PlaceCollectibleAction> for Action {
    fn from(action: PlaceCollectibleAction) -> Self {
        Self::PlaceCollectible(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn discriminants_parse_back_to_their_kind() {
        for kind in ActionKind::iter() {
            assert_eq!(ActionKind::parse(kind.as_str()), Ok(kind));
        }
        assert_eq!(ActionKind::MineGold.as_str(), "goldRock.mined");
    }

    #[test]
    fn unknown_discriminant_is_rejected() {
        assert_eq!(
            ActionKind::parse("crops.teleported"),
            Err(ActionError::UnknownAction {
                name: "crops.teleported".into()
            })
        );
    }

    #[test]
    fn harvest_constructor_matches_node_kind() {
        for node in ResourceNodeKind::ALL {
            let action = Action::harvest(node, "0");
            assert_eq!(action.kind(), node.action_kind());
            assert_eq!(action.kind().harvested_node(), Some(node));
        }
    }
}
