mod inventory;
mod item;

pub use inventory::{
    EmptyInventory,
    Inventory,
    LocalInventory,
};
pub use item::{
    BattleItem,
    ItemEffect,
};
