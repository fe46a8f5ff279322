//! Mining rocks and chopping trees.
//!
//! All four node families share one transition, parameterised by
//! [`ResourceNodeKind`]: the kind decides the collection, the tool consumed,
//! the resource produced and the activity recorded.

use crate::action::{ActionError, ActionKind, ActionTransition, TransitionContext};
use crate::activity::track_activity;
use crate::rules::{boosted_harvested_at, can_harvest};
use crate::state::{GameState, NodeYield, Quantity, ResourceNode, ResourceNodeKind};

/// Payload of a harvest action: the node's key in its collection.
///
/// Descriptors may carry the index as a string or as a bare number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarvestCommand {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "index_repr::deserialize"))]
    pub index: String,
}

impl HarvestCommand {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
        }
    }
}

/// Harvest of a single node, resolved from a [`HarvestCommand`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestAction {
    pub node: ResourceNodeKind,
    pub index: String,
}

impl HarvestAction {
    pub fn new(node: ResourceNodeKind, index: impl Into<String>) -> Self {
        Self {
            node,
            index: index.into(),
        }
    }

    pub fn from_command(node: ResourceNodeKind, command: &HarvestCommand) -> Self {
        Self::new(node, command.index.clone())
    }

    fn target<'s>(&self, state: &'s GameState) -> Result<&'s ResourceNode, ActionError> {
        state
            .nodes(self.node)
            .get(&self.index)
            .ok_or_else(|| ActionError::node_not_found(self.node, &self.index))
    }
}

impl ActionTransition for HarvestAction {
    fn kind(&self) -> ActionKind {
        self.node.action_kind()
    }

    fn pre_validate(
        &self,
        state: &GameState,
        ctx: &TransitionContext<'_>,
    ) -> Result<(), ActionError> {
        if state.bumpkin.is_none() {
            return Err(ActionError::NoBumpkin);
        }

        let target = self.target(state)?;

        let recovery = ctx.config.node_rules(self.node).recovery;
        if !can_harvest(&target.stock, recovery, ctx.created_at) {
            return Err(ActionError::StillRecovering { node: self.node });
        }

        let tool = self.node.tool();
        if state.inventory.get(tool) < Quantity::ONE {
            return Err(ActionError::MissingTool { tool });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, ctx: &TransitionContext<'_>) -> Result<(), ActionError> {
        let rules = ctx.config.node_rules(self.node);
        let harvested_at =
            boosted_harvested_at(self.node, rules, ctx.created_at, &state.collectibles);

        let target = state
            .nodes_mut(self.node)
            .get_mut(&self.index)
            .ok_or_else(|| ActionError::node_not_found(self.node, &self.index))?;
        let harvested = target.stock.amount;
        target.stock = NodeYield::new(rules.regenerated_amount, harvested_at);

        let tool = self.node.tool();
        state
            .inventory
            .take(tool, Quantity::ONE)
            .ok_or(ActionError::MissingTool { tool })?;
        let output = self.node.output();
        state
            .inventory
            .add(output, harvested)
            .ok_or(ActionError::QuantityOverflow { item: output })?;

        let bumpkin = state.bumpkin.as_mut().ok_or(ActionError::NoBumpkin)?;
        bumpkin.activity = track_activity(self.node.activity(), &bumpkin.activity);

        Ok(())
    }
}

#[cfg(feature = "serde")]
mod index_repr {
    use core::fmt;

    use serde::de::{self, Visitor};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(IndexVisitor)
    }

    struct IndexVisitor;

    impl Visitor<'_> for IndexVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a node index as string or non-negative integer")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_owned())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            u64::try_from(value)
                .map(|index| index.to_string())
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Coordinates, Duration, ItemName, PlacedCollectible, Timestamp};

    const NOW: Timestamp = Timestamp(1_700_000_000_000);

    fn gold_farm(amount: u64, harvested_at: Timestamp, pickaxes: u64) -> GameState {
        let mut state = GameState::with_bumpkin();
        state.gold.insert(
            "0".into(),
            ResourceNode::new(
                Coordinates::ORIGIN,
                NodeYield::new(Quantity::new(amount), harvested_at),
            ),
        );
        state
            .inventory
            .set(ItemName::IronPickaxe, Quantity::new(pickaxes));
        state
    }

    fn run(
        action: &HarvestAction,
        state: &GameState,
        config: &GameConfig,
    ) -> Result<GameState, ActionError> {
        let ctx = TransitionContext::new(config, NOW);
        let mut next = state.clone();
        action.pre_validate(&next, &ctx)?;
        action.apply(&mut next, &ctx)?;
        action.post_validate(&next, &ctx)?;
        Ok(next)
    }

    #[test]
    fn mining_gold_moves_yield_into_inventory() {
        let config = GameConfig::default();
        let state = gold_farm(3, Timestamp::ZERO, 1);
        let action = HarvestAction::new(ResourceNodeKind::Gold, "0");

        let next = run(&action, &state, &config).unwrap();

        assert_eq!(next.inventory.get(ItemName::Gold), Quantity::new(3));
        assert_eq!(next.inventory.get(ItemName::IronPickaxe), Quantity::ZERO);
        assert_eq!(next.gold["0"].stock, NodeYield::new(Quantity::new(2), NOW));
        let bumpkin = next.bumpkin.unwrap();
        assert_eq!(bumpkin.activity_count("Gold Mined"), 1);
    }

    #[test]
    fn checks_run_in_fixed_order() {
        let config = GameConfig::default();
        let ctx = TransitionContext::new(&config, NOW);
        let action = HarvestAction::new(ResourceNodeKind::Gold, "0");

        // Recovering node and no tool: recovery is reported first.
        let state = gold_farm(2, NOW, 0);
        assert_eq!(
            action.pre_validate(&state, &ctx),
            Err(ActionError::StillRecovering {
                node: ResourceNodeKind::Gold
            })
        );

        // No avatar beats everything else.
        let mut state = gold_farm(2, NOW, 0);
        state.bumpkin = None;
        assert_eq!(action.pre_validate(&state, &ctx), Err(ActionError::NoBumpkin));

        let missing = HarvestAction::new(ResourceNodeKind::Gold, "9");
        assert_eq!(
            missing.pre_validate(&gold_farm(2, Timestamp::ZERO, 1), &ctx),
            Err(ActionError::node_not_found(ResourceNodeKind::Gold, "9"))
        );
    }

    #[test]
    fn chopping_resets_tree_to_three() {
        let config = GameConfig::default();
        let mut state = GameState::with_bumpkin();
        state
            .trees
            .insert("4".into(), ResourceNode::fresh(Quantity::new(1)));
        state.inventory.set(ItemName::Axe, Quantity::new(5));

        let next = run(&HarvestAction::new(ResourceNodeKind::Tree, "4"), &state, &config).unwrap();

        assert_eq!(next.inventory.get(ItemName::Wood), Quantity::new(1));
        assert_eq!(next.inventory.get(ItemName::Axe), Quantity::new(4));
        assert_eq!(next.trees["4"].stock.amount, Quantity::new(3));
        assert_eq!(next.bumpkin.unwrap().activity_count("Tree Chopped"), 1);
    }

    #[test]
    fn active_totem_backdates_stored_harvest_time() {
        let config = GameConfig::default();
        let mut state = gold_farm(2, Timestamp::ZERO, 1);
        state.collectibles.insert(
            ItemName::TimeWarpTotem,
            vec![PlacedCollectible::built("totem", Coordinates::ORIGIN, Timestamp(0))],
        );

        let next = run(&HarvestAction::new(ResourceNodeKind::Gold, "0"), &state, &config).unwrap();

        assert_eq!(
            next.gold["0"].stock.harvested_at,
            Some(NOW - Duration::from_hours(12))
        );
    }

    #[test]
    fn full_output_stack_fails_instead_of_overflowing() {
        let config = GameConfig::default();
        let max = Quantity::from_decimal(rust_decimal::Decimal::MAX);
        let mut state = gold_farm(1, Timestamp::ZERO, 1);
        state.gold.get_mut("0").unwrap().stock.amount = max;
        state.inventory.set(ItemName::Gold, max);

        assert_eq!(
            run(&HarvestAction::new(ResourceNodeKind::Gold, "0"), &state, &config),
            Err(ActionError::QuantityOverflow {
                item: ItemName::Gold
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn index_accepts_numbers_and_strings() {
        let from_number: HarvestCommand = serde_json::from_str(r#"{"index": 3}"#).unwrap();
        let from_string: HarvestCommand = serde_json::from_str(r#"{"index": "3"}"#).unwrap();
        assert_eq!(from_number, from_string);
        assert!(serde_json::from_str::<HarvestCommand>(r#"{"index": -1}"#).is_err());
    }
}
