use log::{
    debug,
    info,
};
use uuid::Uuid;

use crate::{
    battle::{
        BattleAction,
        BattleParticipant,
        BattleResult,
        BattleState,
        Combatant,
        EndReason,
        ResolutionContext,
        Team,
        Winner,
        core_battle_actions,
        core_battle_effects,
        core_battle_logs,
        outcome,
        reward,
        speed_order,
    },
    config::{
        BattleConfig,
        Tuning,
    },
    error::{
        BattleError,
        ValidationError,
    },
    log::BattleLogEntry,
};

/// What happened while resolving a single action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    /// Log entries appended by the action, including any turn advancement.
    pub entries: Vec<BattleLogEntry>,
    /// The result of the battle, if the action ended it.
    pub result: Option<BattleResult>,
}

fn validate_battle(
    player: &Combatant,
    opponent: &Combatant,
    config: &BattleConfig,
) -> Result<(), ValidationError> {
    let mut error = ValidationError::default();
    error.extend(player.problems());
    error.extend(opponent.problems());
    if !player.id.is_empty() && player.id == opponent.id {
        error.add(format!("both combatants have the id {}", player.id));
    }
    config.validate(&mut error);
    error.into_result()
}

/// Creates a new battle between the host's combatant and an opponent.
///
/// Nothing is built unless both combatants and the configuration are valid.
pub fn create_battle(
    player: Combatant,
    opponent: Combatant,
    config: &BattleConfig,
    tuning: &Tuning,
    started_at: u64,
) -> Result<BattleState, BattleError> {
    validate_battle(&player, &opponent, config)?;

    let participants = [
        BattleParticipant::new(player, Team::Player),
        BattleParticipant::new(opponent, Team::Opponent),
    ];
    let turn_order = speed_order::turn_order(&participants);
    let reward = reward::generate_reward_table(tuning, config, &participants[1]);
    let mut state = BattleState {
        id: Uuid::new_v4(),
        kind: config.kind,
        started_at,
        participants,
        turn_order,
        turn_position: 0,
        turn: 0,
        turn_cap: config.turn_cap,
        flee_allowed: config.flee_allowed(),
        items_allowed: config.items_allowed(),
        log: Default::default(),
        reward,
        result: None,
    };
    core_battle_logs::battle_started(&mut state, started_at);
    info!(
        "created {} battle {} with turn order {:?}",
        state.kind.name(),
        state.id,
        state.turn_order
    );
    Ok(state)
}

/// Resolves a single action by the participant whose turn it is.
///
/// The action is fully validated before anything changes. Afterwards, the battle either ends or
/// moves on to the next participant.
pub fn resolve_action(
    context: &mut ResolutionContext,
    action: &BattleAction,
) -> Result<ActionReport, BattleError> {
    let state = context.state();
    if state.ended() {
        return Err(BattleError::BattleAlreadyEnded);
    }
    let index = state
        .participant_index(action.participant())
        .ok_or_else(|| BattleError::ParticipantNotFound(action.participant().to_owned()))?;
    if index != state.current_index() {
        return Err(BattleError::OutOfTurn(action.participant().to_owned()));
    }
    let first_entry = state.log().len();

    debug!("resolving {action:?} on turn {}", state.turn());
    let fled = match action {
        BattleAction::UseMove {
            move_id, target, ..
        } => core_battle_actions::use_move(context, index, move_id, target.as_deref())
            .map(|()| None),
        BattleAction::UseItem { item, target, .. } => {
            core_battle_actions::use_item(context, index, item, target.as_deref()).map(|()| None)
        }
        BattleAction::SkipTurn { .. } => {
            core_battle_actions::skip_turn(context, index);
            Ok(None)
        }
        BattleAction::Flee { .. } => core_battle_actions::flee(context, index),
    }?;

    let termination = match fled {
        Some(outcome) => Some(outcome),
        None => match outcome::check_termination(context.state()) {
            Some(outcome) => Some(outcome),
            None => {
                advance_turn(context);
                outcome::check_termination(context.state())
            }
        },
    };
    let result = termination.map(|(winner, reason)| finish_battle(context, winner, reason));

    Ok(ActionReport {
        entries: context.state().log().entries_since(first_entry).to_vec(),
        result,
    })
}

/// Moves on to the next participant in the turn order.
///
/// When the order wraps, a full turn cycle has completed: the turn counter increments and status
/// effects tick.
pub fn advance_turn(context: &mut ResolutionContext) {
    let state = context.state_mut();
    state.turn_position = (state.turn_position + 1) % state.turn_order.len();
    if state.turn_position == 0 {
        state.turn += 1;
        debug!("battle {} entered turn {}", state.id, state.turn);
        core_battle_effects::tick_status_effects(context);
    }
}

/// Ends the battle, finalizing rewards from the snapshotted reward table.
pub fn finish_battle(
    context: &mut ResolutionContext,
    winner: Winner,
    reason: EndReason,
) -> BattleResult {
    let table = context.state().reward().clone();
    let tuning = context.tuning();
    let rewards = reward::roll_rewards(context.prng(), &table, tuning, reason);
    let result = BattleResult {
        winner,
        end_reason: reason,
        turns: context.state().turn(),
        rewards,
    };
    core_battle_logs::battle_ended(context, &result);
    let state = context.state_mut();
    state.result = Some(result.clone());
    info!(
        "battle {} ended after {} turns: {} ({})",
        state.id,
        result.turns,
        winner.name(),
        reason.name()
    );
    result
}
