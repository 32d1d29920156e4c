use anyhow::{
    Context,
    Result,
};

use crate::{
    common::FastHashMap,
    moves::BattleMove,
};

/// Read-only lookup of moves by ID.
pub trait MoveRegistry: Send + Sync {
    /// Looks up a move by ID.
    fn lookup(&self, id: &str) -> Option<BattleMove>;
}

/// A [`MoveRegistry`] that keeps all moves in memory.
#[derive(Debug, Default, Clone)]
pub struct LocalMoveRegistry {
    moves: FastHashMap<String, BattleMove>,
}

impl LocalMoveRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from a JSON array of moves.
    pub fn from_json(json: &str) -> Result<Self> {
        let moves = serde_json::from_str::<Vec<BattleMove>>(json)
            .context("failed to parse move registry")?;
        Ok(Self::from_iter(moves))
    }

    /// Adds a move to the registry, replacing any move with the same ID.
    pub fn insert(&mut self, battle_move: BattleMove) {
        self.moves.insert(battle_move.id.clone(), battle_move);
    }

    /// Number of moves in the registry.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Checks if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl FromIterator<BattleMove> for LocalMoveRegistry {
    fn from_iter<T: IntoIterator<Item = BattleMove>>(iter: T) -> Self {
        let mut registry = Self::new();
        for battle_move in iter {
            registry.insert(battle_move);
        }
        registry
    }
}

impl MoveRegistry for LocalMoveRegistry {
    fn lookup(&self, id: &str) -> Option<BattleMove> {
        self.moves.get(id).cloned()
    }
}
