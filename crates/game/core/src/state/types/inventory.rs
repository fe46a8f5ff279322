//! Player inventory keyed by item name.

use std::collections::BTreeMap;

use super::{ItemName, Quantity};

/// Mapping from item to held quantity.
///
/// Missing keys read as zero. Entries that drop to zero are kept, so a spent
/// tool still shows up as `0` in the next snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Inventory {
    items: BTreeMap<ItemName, Quantity>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Held amount of `item`, zero when absent.
    pub fn get(&self, item: ItemName) -> Quantity {
        self.items.get(&item).copied().unwrap_or(Quantity::ZERO)
    }

    pub fn contains(&self, item: ItemName) -> bool {
        self.items.contains_key(&item)
    }

    pub fn set(&mut self, item: ItemName, amount: Quantity) {
        self.items.insert(item, amount);
    }

    /// Adds `amount` of `item`, leaving the inventory untouched and returning
    /// `None` if the total would overflow.
    pub fn add(&mut self, item: ItemName, amount: Quantity) -> Option<Quantity> {
        let total = self.get(item).checked_add(amount)?;
        self.items.insert(item, total);
        Some(total)
    }

    /// Removes `amount` of `item`, leaving the inventory untouched and
    /// returning `None` if not enough is held.
    pub fn take(&mut self, item: ItemName, amount: Quantity) -> Option<Quantity> {
        let remaining = self.get(item).checked_sub(amount)?;
        self.items.insert(item, remaining);
        Some(remaining)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemName, Quantity)> + '_ {
        self.items.iter().map(|(item, amount)| (*item, *amount))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item whose quantity is negative, if the snapshot is corrupt.
    pub fn first_negative(&self) -> Option<ItemName> {
        self.iter()
            .find(|(_, amount)| amount.is_negative())
            .map(|(item, _)| item)
    }
}

impl FromIterator<(ItemName, Quantity)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (ItemName, Quantity)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
