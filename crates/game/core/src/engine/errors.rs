//! Error types for action execution pipeline.

use crate::action::{ActionError, ActionKind};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
///
/// One variant per action type, each carrying the failing phase and the
/// [`ActionError`] it produced. The snapshot passed to the engine is never
/// modified when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("stone.mined action failed: {0}")]
    MineStone(TransitionPhaseError<ActionError>),

    #[error("ironRock.mined action failed: {0}")]
    MineIron(TransitionPhaseError<ActionError>),

    #[error("goldRock.mined action failed: {0}")]
    MineGold(TransitionPhaseError<ActionError>),

    #[error("timber.chopped action failed: {0}")]
    ChopTree(TransitionPhaseError<ActionError>),

    #[error("bumpkin.feed action failed: {0}")]
    FeedBumpkin(TransitionPhaseError<ActionError>),

    #[error("tool.crafted action failed: {0}")]
    CraftTool(TransitionPhaseError<ActionError>),

    #[error("collectible.placed action failed: {0}")]
    PlaceCollectible(TransitionPhaseError<ActionError>),
}

impl ExecuteError {
    /// Wraps a phase failure under the variant for `kind`.
    pub fn new(kind: ActionKind, failure: TransitionPhaseError<ActionError>) -> Self {
        match kind {
            ActionKind::MineStone => Self::MineStone(failure),
            ActionKind::MineIron => Self::MineIron(failure),
            ActionKind::MineGold => Self::MineGold(failure),
            ActionKind::ChopTree => Self::ChopTree(failure),
            ActionKind::FeedBumpkin => Self::FeedBumpkin(failure),
            ActionKind::CraftTool => Self::CraftTool(failure),
            ActionKind::PlaceCollectible => Self::PlaceCollectible(failure),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::MineStone(_) => ActionKind::MineStone,
            Self::MineIron(_) => ActionKind::MineIron,
            Self::MineGold(_) => ActionKind::MineGold,
            Self::ChopTree(_) => ActionKind::ChopTree,
            Self::FeedBumpkin(_) => ActionKind::FeedBumpkin,
            Self::CraftTool(_) => ActionKind::CraftTool,
            Self::PlaceCollectible(_) => ActionKind::PlaceCollectible,
        }
    }

    fn failure(&self) -> &TransitionPhaseError<ActionError> {
        match self {
            Self::MineStone(failure)
            | Self::MineIron(failure)
            | Self::MineGold(failure)
            | Self::ChopTree(failure)
            | Self::FeedBumpkin(failure)
            | Self::CraftTool(failure)
            | Self::PlaceCollectible(failure) => failure,
        }
    }

    /// The domain failure, without action or phase decoration.
    pub fn error(&self) -> &ActionError {
        &self.failure().error
    }

    pub fn phase(&self) -> TransitionPhase {
        self.failure().phase
    }

    pub fn into_error(self) -> ActionError {
        match self {
            Self::MineStone(failure)
            | Self::MineIron(failure)
            | Self::MineGold(failure)
            | Self::ChopTree(failure)
            | Self::FeedBumpkin(failure)
            | Self::CraftTool(failure)
            | Self::PlaceCollectible(failure) => failure.error,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match (self.phase(), self.error().severity()) {
            (TransitionPhase::PreValidate, severity) | (_, severity @ ErrorSeverity::Fatal) => {
                severity
            }
            // Preconditions held but the handler still failed.
            (TransitionPhase::Apply | TransitionPhase::PostValidate, _) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        self.error().error_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemName;

    #[test]
    fn display_names_action_and_phase() {
        let error = ExecuteError::new(
            ActionKind::MineGold,
            TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                ActionError::MissingTool {
                    tool: ItemName::IronPickaxe,
                },
            ),
        );

        assert_eq!(
            error.to_string(),
            "goldRock.mined action failed: pre_validate failed: No iron pickaxes left"
        );
        assert_eq!(error.kind(), ActionKind::MineGold);
        assert_eq!(error.error_code(), "ACTION_MISSING_TOOL");
    }

    #[test]
    fn post_validation_failures_are_internal() {
        let error = ExecuteError::new(
            ActionKind::CraftTool,
            TransitionPhaseError::new(
                TransitionPhase::PostValidate,
                ActionError::NegativeQuantity {
                    item: ItemName::Wood,
                },
            ),
        );
        assert!(error.severity().is_internal());
        assert_eq!(error.phase(), TransitionPhase::PostValidate);
    }

    #[test]
    fn corrupt_balance_stays_fatal_and_apply_failures_are_internal() {
        let corrupt = ExecuteError::new(
            ActionKind::MineStone,
            TransitionPhaseError::new(TransitionPhase::PostValidate, ActionError::NegativeCoins),
        );
        assert_eq!(corrupt.severity(), ErrorSeverity::Fatal);

        let overflow = ExecuteError::new(
            ActionKind::MineGold,
            TransitionPhaseError::new(
                TransitionPhase::Apply,
                ActionError::QuantityOverflow {
                    item: ItemName::Gold,
                },
            ),
        );
        assert_eq!(overflow.severity(), ErrorSeverity::Internal);
        assert_eq!(overflow.error_code(), "ACTION_QUANTITY_OVERFLOW");
    }
}
