//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Each
//! call clones the caller's snapshot, routes the action to its transition,
//! drives the three phases on the clone and hands the clone back only when
//! every phase succeeded. The engine keeps no state between calls apart from
//! its immutable [`GameConfig`].

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, TransitionContext};
use crate::config::GameConfig;
use crate::state::{GameState, Timestamp};

/// Stateless action processor bound to one rule set.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    config: GameConfig,
}

impl GameEngine {
    /// Creates an engine that applies `config`.
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Executes `action` against `state`, reading the wall clock when no
    /// `created_at` is given.
    ///
    /// The clock is read once, before any phase runs, so every check inside
    /// the action sees the same instant.
    #[cfg(feature = "std")]
    pub fn execute(
        &self,
        state: &GameState,
        action: &Action,
        created_at: Option<Timestamp>,
    ) -> Result<GameState, ExecuteError> {
        self.execute_at(state, action, created_at.unwrap_or_else(Timestamp::now))
    }

    /// Executes `action` against `state` at logical time `created_at`.
    ///
    /// Returns the successor snapshot. `state` is never modified, whether the
    /// action succeeds or not, and identical inputs always yield identical
    /// outputs.
    pub fn execute_at(
        &self,
        state: &GameState,
        action: &Action,
        created_at: Timestamp,
    ) -> Result<GameState, ExecuteError> {
        let ctx = TransitionContext::new(&self.config, created_at);
        let mut next = state.clone();
        transition::execute_transition(action, &mut next, &ctx)?;
        Ok(next)
    }

    /// Applies `actions` in order, stopping at the first failure.
    ///
    /// Each step sees the snapshot produced by the previous one. On failure
    /// the index of the rejected action is returned with its error; the
    /// input snapshot is left untouched.
    pub fn execute_all<'a, I>(
        &self,
        state: &GameState,
        actions: I,
    ) -> Result<GameState, (usize, ExecuteError)>
    where
        I: IntoIterator<Item = (&'a Action, Timestamp)>,
    {
        let mut current = state.clone();
        for (position, (action, created_at)) in actions.into_iter().enumerate() {
            current = self
                .execute_at(&current, action, created_at)
                .map_err(|error| (position, error))?;
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionError, FeedBumpkinAction};
    use crate::state::{ItemName, Quantity, ResourceNode, ResourceNodeKind};

    fn stone_quarry() -> GameState {
        let mut state = GameState::with_bumpkin();
        state
            .stones
            .insert("0".into(), ResourceNode::fresh(Quantity::new(2)));
        state.inventory.set(ItemName::Pickaxe, Quantity::new(2));
        state
    }

    #[test]
    fn failure_leaves_input_untouched() {
        let engine = GameEngine::default();
        let state = stone_quarry();
        let before = state.clone();

        let error = engine
            .execute_at(
                &state,
                &FeedBumpkinAction::new(ItemName::KaleStew, 1).into(),
                Timestamp(1),
            )
            .unwrap_err();

        assert_eq!(error.phase(), TransitionPhase::PreValidate);
        assert!(matches!(error.error(), ActionError::MissingResource { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn execute_all_threads_snapshots_through_steps() {
        let engine = GameEngine::default();
        let mine = Action::harvest(ResourceNodeKind::Stone, "0");
        let later = Timestamp(0) + GameConfig::STONE_RECOVERY;

        let next = engine
            .execute_all(&stone_quarry(), [(&mine, Timestamp(0)), (&mine, later)])
            .unwrap();
        assert_eq!(next.inventory.get(ItemName::Stone), Quantity::new(4));
        assert_eq!(next.inventory.get(ItemName::Pickaxe), Quantity::ZERO);

        let (position, error) = engine
            .execute_all(&stone_quarry(), [(&mine, Timestamp(0)), (&mine, Timestamp(1))])
            .unwrap_err();
        assert_eq!(position, 1);
        assert_eq!(
            error.into_error(),
            ActionError::StillRecovering {
                node: ResourceNodeKind::Stone
            }
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn missing_timestamp_falls_back_to_wall_clock() {
        let engine = GameEngine::default();
        let mine = Action::harvest(ResourceNodeKind::Stone, "0");

        let next = engine.execute(&stone_quarry(), &mine, None).unwrap();
        assert!(next.stones["0"].stock.harvested_at.is_some_and(|at| at > Timestamp::ZERO));
    }
}
