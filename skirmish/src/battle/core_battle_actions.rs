use log::debug;
use skirmish_prng::rand_util;

use crate::{
    battle::{
        EndReason,
        ResolutionContext,
        Winner,
        calculations,
        core_battle_logs,
        outcome,
    },
    error::BattleError,
    items::ItemEffect,
    moves::{
        BattleMove,
        MoveTarget,
    },
};

fn opposing_index(index: usize) -> usize {
    1 - index
}

fn resolve_target(
    context: &ResolutionContext,
    target: Option<&str>,
    default: usize,
) -> Result<usize, BattleError> {
    match target {
        Some(target) => context
            .state()
            .participant_index(target)
            .ok_or_else(|| BattleError::NoValidTarget(target.to_owned())),
        None => Ok(default),
    }
}

/// Checks everything about a move before it is used, so that a rejected move changes nothing.
fn validate_move(
    context: &ResolutionContext,
    user: usize,
    move_id: &str,
    target: Option<&str>,
) -> Result<(BattleMove, usize), BattleError> {
    let participant = context.participant(user);
    if !participant.knows_move(move_id) {
        return Err(BattleError::MoveNotKnown {
            participant: participant.id.clone(),
            move_id: move_id.to_owned(),
        });
    }
    let mov = context
        .moves()
        .lookup(move_id)
        .ok_or_else(|| BattleError::MoveNotFound(move_id.to_owned()))?;
    if participant.action_points < mov.cost {
        return Err(BattleError::InsufficientActionPoints {
            participant: participant.id.clone(),
            required: mov.cost,
            available: participant.action_points,
        });
    }
    let default_target = match mov.target {
        MoveTarget::Opponent => opposing_index(user),
        MoveTarget::User => user,
    };
    let target = resolve_target(context, target, default_target)?;
    Ok((mov, target))
}

/// Uses a move.
///
/// Action points are spent even if the move misses.
pub fn use_move(
    context: &mut ResolutionContext,
    user: usize,
    move_id: &str,
    target: Option<&str>,
) -> Result<(), BattleError> {
    let (mov, target) = validate_move(context, user, move_id, target)?;

    context.participant_mut(user).action_points -= mov.cost;

    let accuracy = calculations::final_accuracy(
        mov.accuracy.unwrap_or(context.tuning().base_accuracy),
        context.participant(user).modifiers.accuracy,
        context.participant(target).modifiers.evasion,
    );
    if !calculations::accuracy_check(context.prng(), accuracy) {
        debug!(
            "{} missed {} with accuracy {accuracy}",
            mov.id,
            context.participant(target).id
        );
        core_battle_logs::move_missed(context, user, target, &mov);
        return Ok(());
    }

    if mov.deals_damage() {
        let tuning = context.tuning();
        let attack = context.participant(user).effective_attack();
        let defense = context.participant(target).effective_defense();
        let roll = calculations::roll_damage(context.prng(), tuning, mov.power, attack, defense);
        debug!(
            "{} rolled {} raw damage (critical: {}) for {} damage",
            mov.id, roll.raw, roll.critical, roll.damage
        );
        context.participant_mut(target).damage(roll.damage);
        core_battle_logs::move_hit(context, user, target, &mov, roll.damage, roll.critical);
    } else {
        core_battle_logs::use_move(context, user, target, &mov);
    }

    if let Some(descriptor) = &mov.status_effect {
        if rand_util::percent_chance(context.prng(), descriptor.chance) {
            let application = context.participant_mut(target).apply_status_effect(descriptor);
            core_battle_logs::status_applied(context, user, target, descriptor.kind, application);
        }
    }

    if context.participant(target).fainted() {
        core_battle_logs::faint(context, target);
    }
    Ok(())
}

/// Uses an item from the inventory.
///
/// The item is only taken out of the inventory once the action is known to be valid.
pub fn use_item(
    context: &mut ResolutionContext,
    user: usize,
    item_id: &str,
    target: Option<&str>,
) -> Result<(), BattleError> {
    if !context.state().items_allowed() {
        return Err(BattleError::ItemsNotAllowed);
    }
    let target = resolve_target(context, target, user)?;
    let item = context
        .inventory()
        .take(item_id)
        .ok_or_else(|| BattleError::ItemNotAvailable(item_id.to_owned()))?;

    let participant = context.participant_mut(target);
    let (detail, healing) = match &item.effect {
        ItemEffect::Heal(amount) => {
            let healed = participant.heal(*amount);
            (format!("Restored {healed} health."), Some(healed))
        }
        ItemEffect::RestoreActionPoints(amount) => {
            let restored = participant.restore_action_points(*amount);
            (format!("Restored {restored} action points."), None)
        }
        ItemEffect::Cure(kind) => {
            let cured = participant.cure_status_effects(*kind);
            let detail = match cured {
                0 => "It had no effect.".to_owned(),
                1 => "Cured 1 status effect.".to_owned(),
                _ => format!("Cured {cured} status effects."),
            };
            (detail, None)
        }
    };
    core_battle_logs::use_item(context, user, target, &item, &detail, healing);
    Ok(())
}

/// Skips the turn, recovering action points.
pub fn skip_turn(context: &mut ResolutionContext, participant: usize) {
    let amount = context.tuning().skip_turn_restore;
    let restored = context
        .participant_mut(participant)
        .restore_action_points(amount);
    core_battle_logs::skip_turn(context, participant, restored);
}

/// Attempts to flee.
///
/// Returns the outcome of the battle if the participant escaped.
pub fn flee(
    context: &mut ResolutionContext,
    participant: usize,
) -> Result<Option<(Winner, EndReason)>, BattleError> {
    if !context.state().flee_allowed() {
        return Err(BattleError::FleeNotAllowed);
    }
    let chance = context.tuning().flee_chance;
    let success = rand_util::percent_chance(context.prng(), chance);
    core_battle_logs::flee(context, participant, success);
    if success {
        Ok(Some(outcome::flee_outcome(context.participant(participant).team)))
    } else {
        Ok(None)
    }
}
