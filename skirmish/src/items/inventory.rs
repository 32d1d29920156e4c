use crate::{
    common::FastHashMap,
    items::BattleItem,
};

/// The item supply a battle draws from.
///
/// Owned by the host; the battle only takes items out.
pub trait Inventory: Send {
    /// Removes one of the item, returning its definition.
    ///
    /// Returns [`None`] without changing anything if no such item is available.
    fn take(&mut self, item_id: &str) -> Option<BattleItem>;
}

/// An [`Inventory`] with counts kept in memory.
#[derive(Debug, Default, Clone)]
pub struct LocalInventory {
    items: FastHashMap<String, (BattleItem, u32)>,
}

impl LocalInventory {
    /// Creates a new, empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds some quantity of an item.
    pub fn add(&mut self, item: BattleItem, quantity: u32) {
        self.items
            .entry(item.id.clone())
            .and_modify(|(_, count)| *count += quantity)
            .or_insert((item, quantity));
    }

    /// The number of the item available.
    pub fn count(&self, item_id: &str) -> u32 {
        self.items.get(item_id).map(|(_, count)| *count).unwrap_or(0)
    }
}

impl Inventory for LocalInventory {
    fn take(&mut self, item_id: &str) -> Option<BattleItem> {
        let (item, count) = self.items.get_mut(item_id)?;
        if *count == 0 {
            return None;
        }
        *count -= 1;
        Some(item.clone())
    }
}

/// An [`Inventory`] that never has anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyInventory;

impl Inventory for EmptyInventory {
    fn take(&mut self, _: &str) -> Option<BattleItem> {
        None
    }
}
