use crate::action::{ActionError, ActionKind, ActionTransition, TransitionContext};
use crate::activity::track_activity_by;
use crate::state::{GameState, ItemName, Quantity, ToolRecipe};

/// Crafts `amount` tools, paying coins and ingredients per unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftToolAction {
    pub tool: ItemName,
    #[cfg_attr(feature = "serde", serde(default = "default_amount"))]
    pub amount: u32,
}

#[cfg(feature = "serde")]
fn default_amount() -> u32 {
    1
}

impl CraftToolAction {
    pub fn new(tool: ItemName, amount: u32) -> Self {
        Self { tool, amount }
    }

    fn recipe(&self) -> Result<ToolRecipe, ActionError> {
        self.tool
            .recipe()
            .ok_or(ActionError::NotCraftable { item: self.tool })
    }

    fn total_price(&self, recipe: &ToolRecipe) -> Quantity {
        recipe.price() * self.amount
    }

    /// Ingredient requirements scaled to `amount`, in recipe order.
    fn requirements<'r>(
        &self,
        recipe: &'r ToolRecipe,
    ) -> impl Iterator<Item = (ItemName, Quantity)> + 'r {
        let amount = self.amount;
        recipe
            .ingredients
            .iter()
            .map(move |&(item, per_unit)| (item, Quantity::from(per_unit) * amount))
    }
}

impl ActionTransition for CraftToolAction {
    fn kind(&self) -> ActionKind {
        ActionKind::CraftTool
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

        let recipe = self.recipe()?;
        let price = self.total_price(&recipe);
        if state.coins < price {
            return Err(ActionError::InsufficientCoins {
                required: price,
                available: state.coins,
            });
        }

        for (item, required) in self.requirements(&recipe) {
            let available = state.inventory.get(item);
            if available < required {
                return Err(ActionError::missing_resource(item, required, available));
            }
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, _ctx: &TransitionContext<'_>) -> Result<(), ActionError> {
        let recipe = self.recipe()?;
        let price = self.total_price(&recipe);

        state.coins = state
            .coins
            .checked_sub(price)
            .ok_or(ActionError::InsufficientCoins {
                required: price,
                available: state.coins,
            })?;

        for (item, required) in self.requirements(&recipe) {
            let available = state.inventory.get(item);
            state
                .inventory
                .take(item, required)
                .ok_or_else(|| ActionError::missing_resource(item, required, available))?;
        }

        state
            .inventory
            .add(self.tool, Quantity::from(self.amount))
            .ok_or(ActionError::QuantityOverflow { item: self.tool })?;

        let bumpkin = state.bumpkin.as_mut().ok_or(ActionError::NoBumpkin)?;
        let crafted = track_activity_by(
            &format!("{} Crafted", self.tool),
            &bumpkin.activity,
            u64::from(self.amount),
        );
        bumpkin.activity = track_activity_by("Coins Spent", &crafted, price.whole_units());

        Ok(())
    }
}
