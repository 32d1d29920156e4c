use itertools::Itertools;

use crate::{
    battle::{
        BattleResult,
        BattleState,
        ResolutionContext,
        StatusApplication,
        StatusEffectKind,
        Winner,
    },
    items::BattleItem,
    log::{
        LogEntryKind,
        LogEvent,
    },
    moves::BattleMove,
};

pub fn battle_started(state: &mut BattleState, timestamp: u64) {
    let names = state
        .participants
        .iter()
        .map(|participant| participant.name.as_str())
        .join(" vs. ");
    let event = LogEvent::new(
        LogEntryKind::Other,
        state.player().id.clone(),
        format!("Battle started: {names}!"),
    )
    .with_target(state.opponent().id.clone())
    .important();
    let turn = state.turn;
    state.log_mut().push(turn, timestamp, event);
}

pub fn move_missed(context: &mut ResolutionContext, user: usize, target: usize, mov: &BattleMove) {
    let user = context.participant(user);
    let event = LogEvent::new(
        LogEntryKind::Move,
        user.id.clone(),
        format!("{} used {}, but it missed!", user.name, mov.name),
    )
    .with_target(context.participant(target).id.clone())
    .with_move(mov.id.clone());
    context.log(event);
}

pub fn move_hit(
    context: &mut ResolutionContext,
    user: usize,
    target: usize,
    mov: &BattleMove,
    damage: u32,
    critical: bool,
) {
    let user = context.participant(user);
    let target = context.participant(target);
    let mut message = format!(
        "{} used {} on {} for {damage} damage!",
        user.name, mov.name, target.name
    );
    if critical {
        message.push_str(" A critical hit!");
    }
    let event = LogEvent::new(LogEntryKind::Move, user.id.clone(), message)
        .with_target(target.id.clone())
        .with_move(mov.id.clone())
        .with_damage(damage);
    context.log(event);
}

pub fn use_move(context: &mut ResolutionContext, user: usize, target: usize, mov: &BattleMove) {
    let user = context.participant(user);
    let target = context.participant(target);
    let message = if user.id == target.id {
        format!("{} used {}!", user.name, mov.name)
    } else {
        format!("{} used {} on {}!", user.name, mov.name, target.name)
    };
    let event = LogEvent::new(LogEntryKind::Move, user.id.clone(), message)
        .with_target(target.id.clone())
        .with_move(mov.id.clone());
    context.log(event);
}

pub fn status_applied(
    context: &mut ResolutionContext,
    user: usize,
    target: usize,
    kind: StatusEffectKind,
    application: StatusApplication,
) {
    let user = context.participant(user);
    let target = context.participant(target);
    let message = match application {
        StatusApplication::Applied => format!("{} is now {}!", target.name, kind.name()),
        StatusApplication::Stacked { intensity } => format!(
            "{} is even more {} (intensity {intensity})!",
            target.name,
            kind.name()
        ),
        StatusApplication::Ignored => format!("{} is already {}.", target.name, kind.name()),
    };
    let event = LogEvent::new(LogEntryKind::Status, user.id.clone(), message)
        .with_target(target.id.clone());
    context.log(event);
}

pub fn status_damage(
    context: &mut ResolutionContext,
    holder: usize,
    kind: StatusEffectKind,
    damage: u32,
) {
    let holder = context.participant(holder);
    let event = LogEvent::new(
        LogEntryKind::Status,
        holder.id.clone(),
        format!(
            "{} took {damage} damage from being {}.",
            holder.name,
            kind.name()
        ),
    )
    .with_damage(damage);
    context.log(event);
}

pub fn status_expired(context: &mut ResolutionContext, holder: usize, kind: StatusEffectKind) {
    let holder = context.participant(holder);
    let event = LogEvent::new(
        LogEntryKind::Status,
        holder.id.clone(),
        format!("{} is no longer {}.", holder.name, kind.name()),
    );
    context.log(event);
}

pub fn faint(context: &mut ResolutionContext, participant: usize) {
    let participant = context.participant(participant);
    let event = LogEvent::new(
        LogEntryKind::Other,
        participant.id.clone(),
        format!("{} fainted!", participant.name),
    )
    .important();
    context.log(event);
}

pub fn use_item(
    context: &mut ResolutionContext,
    user: usize,
    target: usize,
    item: &BattleItem,
    detail: &str,
    healing: Option<u32>,
) {
    let user = context.participant(user);
    let target = context.participant(target);
    let mut event = LogEvent::new(
        LogEntryKind::Item,
        user.id.clone(),
        format!("{} used {} on {}. {detail}", user.name, item.name, target.name),
    )
    .with_target(target.id.clone())
    .with_item(item.id.clone());
    if let Some(healing) = healing {
        event = event.with_healing(healing);
    }
    context.log(event);
}

pub fn skip_turn(context: &mut ResolutionContext, participant: usize, restored: u32) {
    let participant = context.participant(participant);
    let event = LogEvent::new(
        LogEntryKind::Other,
        participant.id.clone(),
        format!(
            "{} rested and recovered {restored} action points.",
            participant.name
        ),
    );
    context.log(event);
}

pub fn flee(context: &mut ResolutionContext, participant: usize, success: bool) {
    let participant = context.participant(participant);
    let event = if success {
        LogEvent::new(
            LogEntryKind::Flee,
            participant.id.clone(),
            format!("{} fled from the battle!", participant.name),
        )
        .important()
    } else {
        LogEvent::new(
            LogEntryKind::Flee,
            participant.id.clone(),
            format!("{} tried to flee, but could not escape!", participant.name),
        )
    };
    context.log(event);
}

pub fn battle_ended(context: &mut ResolutionContext, result: &BattleResult) {
    let state = context.state();
    let message = match result.winner {
        Winner::Draw => format!("The battle ended in a draw ({}).", result.end_reason.name()),
        Winner::Player => format!(
            "{} won the battle ({}).",
            state.player().name,
            result.end_reason.name()
        ),
        Winner::Opponent => format!(
            "{} won the battle ({}).",
            state.opponent().name,
            result.end_reason.name()
        ),
    };
    let event = LogEvent::new(LogEntryKind::Other, state.player().id.clone(), message).important();
    context.log(event);
}
