use skirmish_prng::PseudoRandomNumberGenerator;

use crate::{
    battle::{
        BattleParticipant,
        BattleState,
    },
    common::Clock,
    config::Tuning,
    items::Inventory,
    log::{
        BattleLogEntry,
        LogEvent,
    },
    moves::MoveRegistry,
};

/// Everything needed to resolve part of a battle.
///
/// A context mutably borrows the battle state alongside the collaborators that resolution
/// depends on, so that resolution code never reaches for anything global.
pub struct ResolutionContext<'c> {
    state: &'c mut BattleState,
    prng: &'c mut dyn PseudoRandomNumberGenerator,
    moves: &'c dyn MoveRegistry,
    inventory: &'c mut dyn Inventory,
    tuning: &'c Tuning,
    clock: &'c dyn Clock,
}

impl<'c> ResolutionContext<'c> {
    pub fn new(
        state: &'c mut BattleState,
        prng: &'c mut dyn PseudoRandomNumberGenerator,
        moves: &'c dyn MoveRegistry,
        inventory: &'c mut dyn Inventory,
        tuning: &'c Tuning,
        clock: &'c dyn Clock,
    ) -> Self {
        Self {
            state,
            prng,
            moves,
            inventory,
            tuning,
            clock,
        }
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    pub fn state_mut(&mut self) -> &mut BattleState {
        self.state
    }

    pub fn participant(&self, index: usize) -> &BattleParticipant {
        &self.state.participants[index]
    }

    pub fn participant_mut(&mut self, index: usize) -> &mut BattleParticipant {
        &mut self.state.participants[index]
    }

    pub fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng
    }

    pub fn moves(&self) -> &dyn MoveRegistry {
        self.moves
    }

    pub fn inventory(&mut self) -> &mut dyn Inventory {
        self.inventory
    }

    pub fn tuning(&self) -> &'c Tuning {
        self.tuning
    }

    /// Stamps the event with the current turn and time, and appends it to the battle log.
    pub fn log(&mut self, event: LogEvent) -> &BattleLogEntry {
        let turn = self.state.turn;
        let timestamp = self.clock.now();
        self.state.log_mut().push(turn, timestamp, event)
    }
}
