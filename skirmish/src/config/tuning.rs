use anyhow::{
    Context,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::ValidationError;

fn default_base_accuracy() -> f64 {
    95.0
}

fn default_critical_hit_chance() -> f64 {
    10.0
}

fn default_critical_hit_multiplier() -> f64 {
    1.5
}

fn default_flee_chance() -> f64 {
    50.0
}

fn default_skip_turn_restore() -> u32 {
    10
}

fn default_status_damage_percent() -> f64 {
    10.0
}

fn default_base_experience() -> u32 {
    50
}

fn default_base_currency() -> u32 {
    20
}

fn default_draw_experience_ratio() -> f64 {
    0.5
}

fn default_special_reward_level() -> u32 {
    30
}

fn default_rare_fragment_chance() -> f64 {
    5.0
}

fn default_rare_encounter_chance() -> f64 {
    1.0
}

fn default_move_unlock_chance() -> f64 {
    2.0
}

fn default_formula_base() -> f64 {
    10.0
}

fn default_attack_multiplier() -> f64 {
    1.5
}

fn default_defense_multiplier() -> f64 {
    0.8
}

/// Coefficients of the damage formula.
///
/// ```text
/// raw = base + power + attack * attack_multiplier - defense * defense_multiplier
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageFormula {
    #[serde(default = "default_formula_base")]
    pub base: f64,
    #[serde(default = "default_attack_multiplier")]
    pub attack_multiplier: f64,
    #[serde(default = "default_defense_multiplier")]
    pub defense_multiplier: f64,
}

impl Default for DamageFormula {
    fn default() -> Self {
        Self {
            base: default_formula_base(),
            attack_multiplier: default_attack_multiplier(),
            defense_multiplier: default_defense_multiplier(),
        }
    }
}

/// Numeric coefficients that tune battle resolution.
///
/// Every coefficient has a documented default, which is used whenever the tuning source omits it.
/// All chances are percentages from 0 to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Accuracy of moves that do not declare their own.
    #[serde(default = "default_base_accuracy")]
    pub base_accuracy: f64,

    /// Chance that a damaging hit is critical.
    #[serde(default = "default_critical_hit_chance")]
    pub critical_hit_chance: f64,

    /// Multiplier applied to raw damage on a critical hit, before rounding.
    #[serde(default = "default_critical_hit_multiplier")]
    pub critical_hit_multiplier: f64,

    /// Chance that a flee attempt succeeds.
    #[serde(default = "default_flee_chance")]
    pub flee_chance: f64,

    /// Action points restored by skipping a turn.
    #[serde(default = "default_skip_turn_restore")]
    pub skip_turn_restore: u32,

    #[serde(default)]
    pub damage_formula: DamageFormula,

    /// Percentage of maximum health dealt by damage-over-time effects each turn cycle, per
    /// intensity.
    #[serde(default = "default_status_damage_percent")]
    pub status_damage_percent: f64,

    /// Experience awarded for a victory before the encounter multiplier.
    #[serde(default = "default_base_experience")]
    pub base_experience: u32,

    /// Currency awarded for a victory before the encounter multiplier.
    #[serde(default = "default_base_currency")]
    pub base_currency: u32,

    /// Share of experience awarded when the battle times out.
    #[serde(default = "default_draw_experience_ratio")]
    pub draw_experience_ratio: f64,

    /// Minimum opponent level for special rewards to be rolled.
    #[serde(default = "default_special_reward_level")]
    pub special_reward_level: u32,

    #[serde(default = "default_rare_fragment_chance")]
    pub rare_fragment_chance: f64,

    #[serde(default = "default_rare_encounter_chance")]
    pub rare_encounter_chance: f64,

    #[serde(default = "default_move_unlock_chance")]
    pub move_unlock_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_accuracy: default_base_accuracy(),
            critical_hit_chance: default_critical_hit_chance(),
            critical_hit_multiplier: default_critical_hit_multiplier(),
            flee_chance: default_flee_chance(),
            skip_turn_restore: default_skip_turn_restore(),
            damage_formula: DamageFormula::default(),
            status_damage_percent: default_status_damage_percent(),
            base_experience: default_base_experience(),
            base_currency: default_base_currency(),
            draw_experience_ratio: default_draw_experience_ratio(),
            special_reward_level: default_special_reward_level(),
            rare_fragment_chance: default_rare_fragment_chance(),
            rare_encounter_chance: default_rare_encounter_chance(),
            move_unlock_chance: default_move_unlock_chance(),
        }
    }
}

impl Tuning {
    /// Parses tuning from JSON, falling back to defaults for absent coefficients.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse tuning")
    }

    /// Validates the tuning.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut error = ValidationError::default();
        let percentages = [
            ("base_accuracy", self.base_accuracy),
            ("critical_hit_chance", self.critical_hit_chance),
            ("flee_chance", self.flee_chance),
            ("status_damage_percent", self.status_damage_percent),
            ("rare_fragment_chance", self.rare_fragment_chance),
            ("rare_encounter_chance", self.rare_encounter_chance),
            ("move_unlock_chance", self.move_unlock_chance),
        ];
        for (name, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                error.add(format!("{name} must be between 0 and 100, got {value}"));
            }
        }
        if !self.critical_hit_multiplier.is_finite() || self.critical_hit_multiplier < 0.0 {
            error.add("critical_hit_multiplier must be non-negative");
        }
        if !(0.0..=1.0).contains(&self.draw_experience_ratio) {
            error.add("draw_experience_ratio must be between 0 and 1");
        }
        let formula = &self.damage_formula;
        if [formula.base, formula.attack_multiplier, formula.defense_multiplier]
            .iter()
            .any(|value| !value.is_finite())
        {
            error.add("damage formula coefficients must be finite");
        }
        error.into_result()
    }
}
