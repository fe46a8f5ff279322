//! Action transition dispatch and execution logic.

use crate::action::{
    Action, ActionError, ActionTransition, HarvestAction, HarvestCommand, TransitionContext,
};
use crate::state::{GameState, ResourceNodeKind};

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    ctx: &TransitionContext<'_>,
) -> Result<(), TransitionPhaseError<ActionError>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, ctx)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(())
}

fn drive_harvest(
    node: ResourceNodeKind,
    command: &HarvestCommand,
    state: &mut GameState,
    ctx: &TransitionContext<'_>,
) -> Result<(), TransitionPhaseError<ActionError>> {
    drive_transition(&HarvestAction::from_command(node, command), state, ctx)
}

/// Routes an action to its transition and runs it against `state`.
///
/// Internal implementation of [`super::GameEngine::execute_at`]. `state` is
/// the engine's private working copy; on error it is discarded by the caller.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    ctx: &TransitionContext<'_>,
) -> Result<(), ExecuteError> {
    let outcome = match action {
        Action::MineStone(command) => drive_harvest(ResourceNodeKind::Stone, command, state, ctx),
        Action::MineIron(command) => drive_harvest(ResourceNodeKind::Iron, command, state, ctx),
        Action::MineGold(command) => drive_harvest(ResourceNodeKind::Gold, command, state, ctx),
        Action::ChopTree(command) => drive_harvest(ResourceNodeKind::Tree, command, state, ctx),
        Action::FeedBumpkin(transition) => drive_transition(transition, state, ctx),
        Action::CraftTool(transition) => drive_transition(transition, state, ctx),
        Action::PlaceCollectible(transition) => drive_transition(transition, state, ctx),
    };

    outcome.map_err(|failure| ExecuteError::new(action.kind(), failure))
}
