use skirmish::{
    battle::{
        BattleEngine,
        BattleEngineBuilder,
        BattleEngineOptions,
        BattleEventSink,
        NoopEventSink,
    },
    config::Tuning,
    error::BattleError,
    items::{
        BattleItem,
        LocalInventory,
    },
    moves::{
        BattleMove,
        LocalMoveRegistry,
    },
};

use crate::{
    ControlledRandomNumberGenerator,
    FixedClock,
    test_moves,
};

/// Engine builder object for integration tests.
///
/// Starts out with the common test moves, an empty inventory, and a fixed clock.
pub struct TestBattleBuilder {
    options: BattleEngineOptions,
    moves: LocalMoveRegistry,
    inventory: LocalInventory,
    events: Box<dyn BattleEventSink>,
    clock: FixedClock,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            options: BattleEngineOptions::default(),
            moves: LocalMoveRegistry::from_iter(test_moves()),
            inventory: LocalInventory::new(),
            events: Box::new(NoopEventSink),
            clock: FixedClock(1_700_000_000_000),
            controlled_rng: false,
        }
    }

    /// Builds a new [`BattleEngine`] from the builder.
    pub fn build(mut self) -> Result<BattleEngine, BattleError> {
        if self.controlled_rng {
            self.options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        BattleEngineBuilder::new(self.options)
            .with_moves(self.moves)
            .with_inventory(self.inventory)
            .with_event_sink(self.events)
            .with_clock(self.clock)
            .build()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.options.tuning = tuning;
        self
    }

    pub fn with_move(mut self, battle_move: BattleMove) -> Self {
        self.moves.insert(battle_move);
        self
    }

    pub fn with_item(mut self, item: BattleItem, quantity: u32) -> Self {
        self.inventory.add(item, quantity);
        self
    }

    pub fn with_event_sink<S>(mut self, events: S) -> Self
    where
        S: BattleEventSink + 'static,
    {
        self.events = Box::new(events);
        self
    }

    pub fn with_clock(mut self, clock: FixedClock) -> Self {
        self.clock = clock;
        self
    }
}
