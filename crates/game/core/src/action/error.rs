//! Action execution errors.
//!
//! One taxonomy shared by every handler. Messages are stable and shown to the
//! player as-is.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ItemName, Quantity, ResourceNodeKind};

/// Errors that can occur while validating or applying an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The action needs an avatar and the snapshot has none.
    #[error("You do not have a Bumpkin")]
    NoBumpkin,

    /// The referenced node index is absent from its collection.
    #[error("No {} found.", .node.node_label())]
    NodeNotFound {
        node: ResourceNodeKind,
        index: String,
    },

    /// The node's recovery time has not elapsed yet.
    #[error("{}", .node.recovering_message())]
    StillRecovering { node: ResourceNodeKind },

    /// The tool a harvest consumes is not in the inventory.
    #[error("No {} left", tool_plural(.tool))]
    MissingTool { tool: ItemName },

    /// An input item is held in a smaller quantity than required.
    #[error("Insufficient {item}: required {required}, available {available}")]
    MissingResource {
        item: ItemName,
        required: Quantity,
        available: Quantity,
    },

    /// Not enough coins to pay for the action.
    #[error("Insufficient coins: required {required}, available {available}")]
    InsufficientCoins {
        required: Quantity,
        available: Quantity,
    },

    /// Requested amount must be at least one.
    #[error("Invalid amount")]
    InvalidAmount,

    /// The item cannot be eaten.
    #[error("{item} is not a food")]
    NotFood { item: ItemName },

    /// The item has no crafting recipe.
    #[error("{item} cannot be crafted")]
    NotCraftable { item: ItemName },

    /// The item cannot be placed on the land.
    #[error("{item} cannot be placed")]
    NotPlaceable { item: ItemName },

    /// A placement with this id already exists.
    #[error("Collectible {id} is already placed")]
    DuplicatePlacement { id: String },

    /// An inventory entry is below zero after the action.
    #[error("{item} quantity went negative")]
    NegativeQuantity { item: ItemName },

    /// The coin balance is below zero after the action.
    #[error("Coin balance went negative")]
    NegativeCoins,

    /// Crediting the item would exceed the representable range.
    #[error("{item} quantity overflowed")]
    QuantityOverflow { item: ItemName },

    /// Crediting experience would exceed the representable range.
    #[error("Experience overflowed")]
    ExperienceOverflow,

    /// The action discriminant is not handled by the engine.
    #[error("Unknown action type: {name}")]
    UnknownAction { name: String },
}

impl ActionError {
    pub fn node_not_found(node: ResourceNodeKind, index: &str) -> Self {
        Self::NodeNotFound {
            node,
            index: index.to_owned(),
        }
    }

    pub fn missing_resource(item: ItemName, required: Quantity, available: Quantity) -> Self {
        Self::MissingResource {
            item,
            required,
            available,
        }
    }
}

fn tool_plural(tool: &ItemName) -> &'static str {
    match tool {
        ItemName::Axe => "axes",
        ItemName::Pickaxe => "pickaxes",
        ItemName::StonePickaxe => "stone pickaxes",
        ItemName::IronPickaxe => "iron pickaxes",
        ItemName::GoldPickaxe => "gold pickaxes",
        _ => "tools",
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            StillRecovering { .. } => ErrorSeverity::Recoverable,
            NoBumpkin | NodeNotFound { .. } | UnknownAction { .. } => ErrorSeverity::Validation,
            MissingTool { .. } | MissingResource { .. } | InsufficientCoins { .. } => {
                ErrorSeverity::Validation
            }
            InvalidAmount | NotFood { .. } | NotCraftable { .. } | NotPlaceable { .. } => {
                ErrorSeverity::Validation
            }
            DuplicatePlacement { .. } => ErrorSeverity::Validation,
            QuantityOverflow { .. } | ExperienceOverflow => ErrorSeverity::Internal,
            // Handlers never produce negatives, so one means the input was corrupt.
            NegativeQuantity { .. } | NegativeCoins => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            NoBumpkin => "ACTION_NO_BUMPKIN",
            NodeNotFound { .. } => "ACTION_NODE_NOT_FOUND",
            StillRecovering { .. } => "ACTION_STILL_RECOVERING",
            MissingTool { .. } => "ACTION_MISSING_TOOL",
            MissingResource { .. } => "ACTION_MISSING_RESOURCE",
            InsufficientCoins { .. } => "ACTION_INSUFFICIENT_COINS",
            InvalidAmount => "ACTION_INVALID_AMOUNT",
            NotFood { .. } => "ACTION_NOT_FOOD",
            NotCraftable { .. } => "ACTION_NOT_CRAFTABLE",
            NotPlaceable { .. } => "ACTION_NOT_PLACEABLE",
            DuplicatePlacement { .. } => "ACTION_DUPLICATE_PLACEMENT",
            NegativeQuantity { .. } => "ACTION_NEGATIVE_QUANTITY",
            NegativeCoins => "ACTION_NEGATIVE_COINS",
            QuantityOverflow { .. } => "ACTION_QUANTITY_OVERFLOW",
            ExperienceOverflow => "ACTION_EXPERIENCE_OVERFLOW",
            UnknownAction { .. } => "ACTION_UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_player_facing_text() {
        assert_eq!(ActionError::NoBumpkin.to_string(), "You do not have a Bumpkin");
        assert_eq!(
            ActionError::MissingTool {
                tool: ItemName::IronPickaxe
            }
            .to_string(),
            "No iron pickaxes left"
        );
        assert_eq!(
            ActionError::StillRecovering {
                node: ResourceNodeKind::Gold
            }
            .to_string(),
            "Gold is still recovering"
        );
        assert_eq!(
            ActionError::node_not_found(ResourceNodeKind::Gold, "7").to_string(),
            "No gold rock found."
        );
    }

    #[test]
    fn only_timing_failures_are_recoverable() {
        let recovering = ActionError::StillRecovering {
            node: ResourceNodeKind::Tree,
        };
        assert!(recovering.severity().is_recoverable());
        assert!(!ActionError::NoBumpkin.severity().is_recoverable());
        assert!(
            ActionError::NegativeQuantity {
                item: ItemName::Wood
            }
            .severity()
            .is_internal()
        );
    }

    #[test]
    fn negative_balances_are_fatal_and_overflow_is_internal() {
        assert_eq!(ActionError::NegativeCoins.severity(), ErrorSeverity::Fatal);
        assert_eq!(
            ActionError::NegativeQuantity {
                item: ItemName::Gold
            }
            .severity(),
            ErrorSeverity::Fatal
        );
        assert_eq!(
            ActionError::QuantityOverflow {
                item: ItemName::Gold
            }
            .severity(),
            ErrorSeverity::Internal
        );
        assert_eq!(ActionError::ExperienceOverflow.error_code(), "ACTION_EXPERIENCE_OVERFLOW");
    }
}
