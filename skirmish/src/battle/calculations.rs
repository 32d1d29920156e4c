use skirmish_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::config::{
    DamageFormula,
    Tuning,
};

/// Calculates the accuracy of a move after the attacker's accuracy and the defender's evasion are
/// applied.
pub fn final_accuracy(move_accuracy: f64, accuracy_modifier: f64, evasion_modifier: f64) -> f64 {
    if evasion_modifier <= 0.0 {
        return move_accuracy * accuracy_modifier;
    }
    move_accuracy * accuracy_modifier / evasion_modifier
}

/// Rolls whether a move with the given final accuracy hits.
pub fn accuracy_check(prng: &mut dyn PseudoRandomNumberGenerator, final_accuracy: f64) -> bool {
    rand_util::percent_chance(prng, final_accuracy)
}

/// Calculates raw damage, before critical hits and rounding.
///
/// May be zero or negative when the defender is much sturdier than the attacker.
pub fn raw_damage(formula: &DamageFormula, power: u32, attack: f64, defense: f64) -> f64 {
    formula.base + power as f64 + attack * formula.attack_multiplier
        - defense * formula.defense_multiplier
}

/// Turns raw damage into the damage dealt.
///
/// Critical hits multiply raw damage before rounding. At least 1 damage is always dealt.
pub fn finalize_damage(raw: f64, critical_multiplier: Option<f64>) -> u32 {
    let raw = match critical_multiplier {
        Some(multiplier) => raw * multiplier,
        None => raw,
    };
    // Float to integer casts saturate.
    raw.round().max(1.0) as u32
}

/// The outcome of a damage roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRoll {
    /// Raw damage from the formula, before the critical multiplier.
    pub raw: f64,
    pub critical: bool,
    /// Damage to subtract from the defender's health.
    pub damage: u32,
}

/// Rolls damage for a damaging move, given the attacker's effective attack and the defender's
/// effective defense.
///
/// Consumes exactly one random value for the critical hit.
pub fn roll_damage(
    prng: &mut dyn PseudoRandomNumberGenerator,
    tuning: &Tuning,
    power: u32,
    attack: f64,
    defense: f64,
) -> DamageRoll {
    let raw = raw_damage(&tuning.damage_formula, power, attack, defense);
    let critical = rand_util::percent_chance(prng, tuning.critical_hit_chance);
    let damage = finalize_damage(raw, critical.then_some(tuning.critical_hit_multiplier));
    DamageRoll {
        raw,
        critical,
        damage,
    }
}

/// Calculates the damage a damage-over-time effect deals in one tick.
pub fn status_tick_damage(max_health: u32, percent: f64, intensity: u32) -> u32 {
    (max_health as f64 * percent / 100.0 * intensity as f64)
        .round()
        .max(1.0) as u32
}
