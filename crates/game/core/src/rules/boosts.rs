//! Experience boosts for feeding the avatar.

use rust_decimal::Decimal;

use crate::state::{BudStem, Buds, Collectibles, Consumable, ItemName, Quantity, Timestamp};

use super::collectibles::is_collectible_active;

/// Experience boost granted by an active Observatory.
const OBSERVATORY_BOOST: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Base boost of a placed bud wearing a Chef Hat, before its aura multiplier.
const CHEF_HAT_BOOST: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Additive experience boost for food eaten at `now`.
///
/// Collectible boosts stack. Of the placed buds only the strongest Chef Hat
/// counts, scaled by its aura.
pub fn food_experience_boost(
    collectibles: &Collectibles,
    buds: Option<&Buds>,
    now: Timestamp,
) -> Decimal {
    let mut boost = Decimal::ZERO;

    if is_collectible_active(ItemName::Observatory, collectibles, now) {
        boost += OBSERVATORY_BOOST;
    }

    let best_bud = buds
        .into_iter()
        .flat_map(|buds| buds.values())
        .filter(|bud| bud.is_placed() && bud.stem == BudStem::ChefHat)
        .map(|bud| CHEF_HAT_BOOST * bud.aura.multiplier())
        .max();

    if let Some(bud_boost) = best_bud {
        boost += bud_boost;
    }

    boost
}

/// Experience from eating `amount` units of `food` with the given boost.
pub fn food_experience(food: &Consumable, boost: Decimal, amount: u32) -> Quantity {
    Quantity::from(food.experience).scaled(Decimal::ONE + boost) * amount
}
