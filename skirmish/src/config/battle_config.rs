use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        BattleKind,
        DropCandidate,
    },
    error::ValidationError,
};

fn default_turn_cap() -> u32 {
    100
}

/// Configuration for a single battle, supplied when the battle is initialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Kind of encounter.
    #[serde(default)]
    pub kind: BattleKind,

    /// Number of full turn cycles before the battle ends in a draw.
    #[serde(default = "default_turn_cap")]
    pub turn_cap: u32,

    /// Overrides whether participants may flee.
    ///
    /// If unset, the battle kind decides.
    #[serde(default)]
    pub allow_flee: Option<bool>,

    /// Overrides whether participants may use items.
    ///
    /// If unset, the battle kind decides.
    #[serde(default)]
    pub allow_items: Option<bool>,

    /// Multiplier applied to experience and currency rewards.
    ///
    /// If unset, the battle kind decides.
    #[serde(default)]
    pub reward_multiplier: Option<f64>,

    /// Items that may drop when the battle is won.
    #[serde(default)]
    pub drops: Vec<DropCandidate>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            kind: BattleKind::default(),
            turn_cap: default_turn_cap(),
            allow_flee: None,
            allow_items: None,
            reward_multiplier: None,
            drops: Vec::new(),
        }
    }
}

impl BattleConfig {
    /// Creates a default configuration for the given kind of battle.
    pub fn new(kind: BattleKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Can participants flee?
    pub fn flee_allowed(&self) -> bool {
        self.allow_flee.unwrap_or(self.kind.allows_flee())
    }

    /// Can participants use items?
    pub fn items_allowed(&self) -> bool {
        self.allow_items.unwrap_or(self.kind.allows_items())
    }

    /// The multiplier for experience and currency rewards.
    pub fn reward_multiplier(&self) -> f64 {
        self.reward_multiplier
            .unwrap_or(self.kind.default_reward_multiplier())
    }

    /// Validates the configuration, adding any problems to the given error.
    pub fn validate(&self, error: &mut ValidationError) {
        if self.turn_cap == 0 {
            error.add("turn cap must be at least 1");
        }
        if let Some(multiplier) = self.reward_multiplier {
            if !multiplier.is_finite() || multiplier < 0.0 {
                error.add(format!("reward multiplier {multiplier} is invalid"));
            }
        }
        for drop in &self.drops {
            if !(0.0..=100.0).contains(&drop.chance) {
                error.add(format!(
                    "drop chance for {} must be between 0 and 100, got {}",
                    drop.item, drop.chance
                ));
            }
        }
    }
}
