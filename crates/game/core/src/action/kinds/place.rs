use crate::action::{ActionError, ActionKind, ActionTransition, TransitionContext};
use crate::activity::track_activity;
use crate::state::{Coordinates, GameState, ItemName, PlacedCollectible, Quantity};

/// Places one owned collectible on the land.
///
/// The item stays in the inventory; a player may place as many instances as
/// they hold. Construction finishes after the configured build duration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceCollectibleAction {
    pub name: ItemName,
    pub id: String,
    pub coordinates: Coordinates,
}

impl PlaceCollectibleAction {
    pub fn new(name: ItemName, id: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name,
            id: id.into(),
            coordinates,
        }
    }
}

impl ActionTransition for PlaceCollectibleAction {
    fn kind(&self) -> ActionKind {
        ActionKind::PlaceCollectible
    }

    fn pre_validate(
        &self,
        state: &GameState,
        _ctx: &TransitionContext<'_>,
    ) -> Result<(), ActionError> {
        if state.bumpkin.is_none() {
            return Err(ActionError::NoBumpkin);
        }
        if !self.name.is_placeable() {
            return Err(ActionError::NotPlaceable { item: self.name });
        }

        let held = state.inventory.get(self.name);
        let placed = Quantity::from(state.placed_count(self.name) as u64);
        if placed >= held {
            return Err(ActionError::missing_resource(
                self.name,
                placed + Quantity::ONE,
                held,
            ));
        }

        if state.has_placement_id(&self.id) {
            return Err(ActionError::DuplicatePlacement {
                id: self.id.clone(),
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &TransitionContext<'_>) -> Result<(), ActionError> {
        let ready_at = ctx
            .created_at
            .saturating_add(ctx.config.build_duration(self.name));
        state
            .collectibles
            .entry(self.name)
            .or_default()
            .push(PlacedCollectible::new(
                self.id.clone(),
                self.coordinates,
                ctx.created_at,
                ready_at,
            ));

        let bumpkin = state.bumpkin.as_mut().ok_or(ActionError::NoBumpkin)?;
        bumpkin.activity = track_activity(&format!("{} Placed", self.name), &bumpkin.activity);

        Ok(())
    }
}
