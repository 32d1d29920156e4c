use log::debug;

use crate::battle::{
    ResolutionContext,
    calculations,
    core_battle_logs,
};

/// Ticks every status effect on a single participant.
///
/// Effects tick in list order. Each effect deals its damage over time, then loses a turn, and is
/// removed once no turns remain. Ticking stops if the participant faints.
pub fn tick_participant(context: &mut ResolutionContext, index: usize) {
    let percent = context.tuning().status_damage_percent;
    let mut ticked = 0;
    let mut any_expired = false;
    let mut i = 0;
    while i < context.participant(index).status_effects.len() {
        let effect = context.participant(index).status_effects[i].clone();
        let participant = context.participant_mut(index);

        let damage = effect.kind.deals_damage_over_time().then(|| {
            let damage =
                calculations::status_tick_damage(participant.max_health, percent, effect.intensity);
            participant.damage(damage);
            damage
        });

        let instance = &mut participant.status_effects[i];
        instance.turns_remaining = instance.turns_remaining.saturating_sub(1);
        let expired = instance.turns_remaining == 0;
        if expired {
            participant.status_effects.remove(i);
        } else {
            i += 1;
        }

        if let Some(damage) = damage {
            core_battle_logs::status_damage(context, index, effect.kind, damage);
        }
        if expired {
            core_battle_logs::status_expired(context, index, effect.kind);
        }
        ticked += 1;
        any_expired |= expired;

        if context.participant(index).fainted() {
            core_battle_logs::faint(context, index);
            break;
        }
    }
    if any_expired {
        context.participant_mut(index).recalculate_modifiers();
    }
    debug!(
        "ticked {ticked} status effects on {}",
        context.participant(index).id
    );
}

/// Ticks status effects on every participant, in turn order.
///
/// Stops as soon as any participant faints.
pub fn tick_status_effects(context: &mut ResolutionContext) {
    let order = context.state().turn_order().to_vec();
    for index in order {
        tick_participant(context, index);
        if context.participant(index).fainted() {
            break;
        }
    }
}
