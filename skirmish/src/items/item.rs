use serde::{
    Deserialize,
    Serialize,
};

use crate::battle::StatusEffectKind;

/// The effect of using an item in battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemEffect {
    /// Restores health, up to the maximum.
    Heal(u32),
    /// Restores action points, up to the maximum.
    RestoreActionPoints(u32),
    /// Removes status effects of the given kind, or all of them.
    Cure(Option<StatusEffectKind>),
}

/// An item usable in battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleItem {
    pub id: String,
    pub name: String,
    pub effect: ItemEffect,
}

impl BattleItem {
    pub fn new<I, N>(id: I, name: N, effect: ItemEffect) -> Self
    where
        I: Into<String>,
        N: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            effect,
        }
    }
}
