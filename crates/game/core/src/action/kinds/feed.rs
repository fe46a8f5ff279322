use crate::action::{ActionError, ActionKind, ActionTransition, TransitionContext};
use crate::activity::track_activity_by;
use crate::rules::{food_experience, food_experience_boost};
use crate::state::{GameState, ItemName, Quantity};

/// Feeds `amount` units of a food to the avatar for experience.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedBumpkinAction {
    pub food: ItemName,
    #[cfg_attr(feature = "serde", serde(default = "default_amount"))]
    pub amount: u32,
}

#[cfg(feature = "serde")]
fn default_amount() -> u32 {
    1
}

impl FeedBumpkinAction {
    pub fn new(food: ItemName, amount: u32) -> Self {
        Self { food, amount }
    }
}

impl ActionTransition for FeedBumpkinAction {
    fn kind(&self) -> ActionKind {
        ActionKind::FeedBumpkin
    }

    fn pre_validate(
        &self,
        state: &GameState,
        _ctx: &TransitionContext<'_>,
    ) -> Result<(), ActionError> {
        if state.bumpkin.is_none() {
            return Err(ActionError::NoBumpkin);
        }
        if self.amount == 0 {
            return Err(ActionError::InvalidAmount);
        }
        if self.food.consumable().is_none() {
            return Err(ActionError::NotFood { item: self.food });
        }

        let required = Quantity::from(self.amount);
        let available = state.inventory.get(self.food);
        if available < required {
            return Err(ActionError::missing_resource(self.food, required, available));
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &TransitionContext<'_>) -> Result<(), ActionError> {
        let food = self
            .food
            .consumable()
            .ok_or(ActionError::NotFood { item: self.food })?;
        let boost = food_experience_boost(&state.collectibles, state.buds.as_ref(), ctx.created_at);

        let required = Quantity::from(self.amount);
        let available = state.inventory.get(self.food);
        state
            .inventory
            .take(self.food, required)
            .ok_or_else(|| ActionError::missing_resource(self.food, required, available))?;

        let bumpkin = state.bumpkin.as_mut().ok_or(ActionError::NoBumpkin)?;
        bumpkin.experience = bumpkin
            .experience
            .checked_add(food_experience(&food, boost, self.amount))
            .ok_or(ActionError::ExperienceOverflow)?;
        bumpkin.activity = track_activity_by(
            &format!("{} Fed", self.food),
            &bumpkin.activity,
            u64::from(self.amount),
        );

        Ok(())
    }
}
