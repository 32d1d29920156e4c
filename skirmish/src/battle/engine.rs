use std::mem;

use log::{
    info,
    warn,
};
use serde::{
    Deserialize,
    Serialize,
};
use skirmish_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

use crate::{
    battle::{
        ActionReport,
        BattleAction,
        BattleEvent,
        BattleEventSink,
        BattleParticipant,
        BattleResult,
        BattleState,
        Combatant,
        EndReason,
        NoopEventSink,
        ResolutionContext,
        Team,
        Winner,
        core_battle,
        outcome,
    },
    common::{
        Clock,
        SystemTimeClock,
    },
    config::{
        BattleConfig,
        Tuning,
    },
    error::{
        BattleError,
        ValidationError,
    },
    items::{
        EmptyInventory,
        Inventory,
    },
    moves::{
        LocalMoveRegistry,
        MoveRegistry,
    },
};

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

/// Options that change how the engine behaves across every battle it runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEngineOptions {
    /// The initial seed for random number generation.
    ///
    /// This can be used to effectively replay or control battles.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Numeric coefficients for battle resolution.
    #[serde(default)]
    pub tuning: Tuning,

    /// Function for creating the engine's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            tuning: Tuning::default(),
            rng_factory: default_rng_factory(),
        }
    }
}

/// Object for assembling a [`BattleEngine`] from its collaborators.
///
/// Every collaborator has a default, so only the ones that matter need to be supplied.
pub struct BattleEngineBuilder {
    options: BattleEngineOptions,
    moves: Box<dyn MoveRegistry>,
    inventory: Box<dyn Inventory>,
    events: Box<dyn BattleEventSink>,
    clock: Box<dyn Clock>,
}

impl BattleEngineBuilder {
    pub fn new(options: BattleEngineOptions) -> Self {
        Self {
            options,
            moves: Box::new(LocalMoveRegistry::new()),
            inventory: Box::new(EmptyInventory),
            events: Box::new(NoopEventSink),
            clock: Box::new(SystemTimeClock),
        }
    }

    pub fn with_moves<M>(mut self, moves: M) -> Self
    where
        M: MoveRegistry + 'static,
    {
        self.moves = Box::new(moves);
        self
    }

    pub fn with_inventory<I>(mut self, inventory: I) -> Self
    where
        I: Inventory + 'static,
    {
        self.inventory = Box::new(inventory);
        self
    }

    pub fn with_event_sink<S>(mut self, events: S) -> Self
    where
        S: BattleEventSink + 'static,
    {
        self.events = Box::new(events);
        self
    }

    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    /// Builds the engine, failing if the tuning is invalid.
    pub fn build(self) -> Result<BattleEngine, BattleError> {
        self.options.tuning.validate()?;
        let prng = (self.options.rng_factory)(self.options.seed);
        info!("created battle engine with seed {}", prng.initial_seed());
        Ok(BattleEngine {
            tuning: self.options.tuning,
            prng,
            moves: self.moves,
            inventory: self.inventory,
            events: self.events,
            clock: self.clock,
            active: None,
            finished: None,
        })
    }
}

/// The battle engine, which owns the single active battle.
///
/// All calls are synchronous and run to completion. Callers submit one action at a time for the
/// participant whose turn it is.
pub struct BattleEngine {
    tuning: Tuning,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    moves: Box<dyn MoveRegistry>,
    inventory: Box<dyn Inventory>,
    events: Box<dyn BattleEventSink>,
    clock: Box<dyn Clock>,
    active: Option<BattleState>,
    finished: Option<BattleState>,
}

impl BattleEngine {
    /// Creates an engine with default collaborators.
    pub fn new(options: BattleEngineOptions) -> Result<Self, BattleError> {
        BattleEngineBuilder::new(options).build()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// The engine's random number generator.
    pub fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Starts a new battle between the host's combatant and an opponent.
    pub fn initialize_battle(
        &mut self,
        player: Combatant,
        opponent: Combatant,
        config: BattleConfig,
    ) -> Result<&BattleState, BattleError> {
        if self.active.is_some() {
            return Err(BattleError::AlreadyInProgress);
        }
        let state =
            core_battle::create_battle(player, opponent, &config, &self.tuning, self.clock.now())?;
        self.finished = None;
        self.emit(BattleEvent::started(&state));
        Ok(self.active.insert(state))
    }

    /// Resolves an action by the participant whose turn it is.
    ///
    /// If the action ends the battle, the result is announced and the battle is set aside for
    /// [`Self::take_finished_battle`].
    pub fn process_action(&mut self, action: BattleAction) -> Result<ActionReport, BattleError> {
        let state = self.active.as_mut().ok_or(BattleError::NoActiveBattle)?;
        let mut context = ResolutionContext::new(
            state,
            self.prng.as_mut(),
            self.moves.as_ref(),
            self.inventory.as_mut(),
            &self.tuning,
            self.clock.as_ref(),
        );
        let report = core_battle::resolve_action(&mut context, &action)?;
        if report.result.is_some() {
            self.set_aside_active_battle();
        }
        Ok(report)
    }

    /// The active battle.
    pub fn current_battle(&self) -> Option<&BattleState> {
        self.active.as_ref()
    }

    /// The participant who acts next in the active battle.
    pub fn current_turn_participant(&self) -> Option<&BattleParticipant> {
        self.active
            .as_ref()
            .map(|state| state.current_participant())
    }

    /// Is it the host's participant's turn?
    pub fn is_player_turn(&self) -> bool {
        self.current_turn_participant()
            .is_some_and(|participant| participant.team == Team::Player)
    }

    /// Forces the active battle to end in a draw by timeout.
    ///
    /// Returns [`None`] if no battle is active.
    pub fn shutdown(&mut self) -> Option<BattleResult> {
        let state = self.active.as_mut()?;
        info!("shutting down battle {}", state.id());
        let mut context = ResolutionContext::new(
            state,
            self.prng.as_mut(),
            self.moves.as_ref(),
            self.inventory.as_mut(),
            &self.tuning,
            self.clock.as_ref(),
        );
        let result = core_battle::finish_battle(&mut context, Winner::Draw, EndReason::Timeout);
        self.set_aside_active_battle();
        Some(result)
    }

    /// Discards the active battle without producing a result.
    pub fn reset(&mut self) {
        if let Some(state) = self.active.take() {
            info!("discarded battle {}", state.id());
        }
    }

    /// Resumes a battle from a previously saved state.
    pub fn restore(&mut self, state: BattleState) -> Result<&BattleState, BattleError> {
        if self.active.is_some() {
            return Err(BattleError::AlreadyInProgress);
        }
        if state.ended() {
            return Err(BattleError::BattleAlreadyEnded);
        }
        let mut error = ValidationError::default();
        state.validate(&mut error);
        error.into_result()?;
        // A battle that should have ended is never resumed, even if it carries no result.
        if outcome::check_termination(&state).is_some() {
            return Err(BattleError::BattleAlreadyEnded);
        }
        info!("restored battle {} on turn {}", state.id(), state.turn());
        Ok(self.active.insert(state))
    }

    /// Takes the most recently finished battle, along with its result and full log.
    pub fn take_finished_battle(&mut self) -> Option<BattleState> {
        self.finished.take()
    }

    fn set_aside_active_battle(&mut self) {
        let state = mem::take(&mut self.active);
        if let Some(event) = state.as_ref().and_then(BattleEvent::ended) {
            self.emit(event);
        }
        self.finished = state;
    }

    fn emit(&mut self, event: BattleEvent) {
        if let Err(err) = self.events.emit(event) {
            warn!("failed to emit battle event: {err:#}");
        }
    }
}
