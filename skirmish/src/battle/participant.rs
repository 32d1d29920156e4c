use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    battle::{
        ModifiedStat,
        SpeedOrderable,
        StatusApplication,
        StatusEffectInstance,
        StatusEffectKind,
    },
    common::FastHashSet,
    moves::StatusEffectDescriptor,
};

/// The maximum number of moves a participant may know.
pub const MAX_KNOWN_MOVES: usize = 4;

fn default_level() -> u32 {
    1
}

/// One of the two teams in a battle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Team {
    /// The host's own creature.
    #[string = "self"]
    Player,
    #[string = "opponent"]
    Opponent,
}

impl Team {
    /// The other team.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Multiplicative stat modifiers that only live for the duration of a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatModifiers {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub accuracy: f64,
    pub evasion: f64,
}

impl Default for StatModifiers {
    fn default() -> Self {
        Self {
            attack: 1.0,
            defense: 1.0,
            speed: 1.0,
            accuracy: 1.0,
            evasion: 1.0,
        }
    }
}

impl StatModifiers {
    fn get_mut(&mut self, stat: ModifiedStat) -> &mut f64 {
        match stat {
            ModifiedStat::Attack => &mut self.attack,
            ModifiedStat::Defense => &mut self.defense,
            ModifiedStat::Speed => &mut self.speed,
            ModifiedStat::Accuracy => &mut self.accuracy,
            ModifiedStat::Evasion => &mut self.evasion,
        }
    }
}

/// A snapshot of a creature's persistent stats, used to create a [`BattleParticipant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: String,
    pub name: String,
    pub max_health: u32,
    pub max_action_points: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    #[serde(default = "default_level")]
    pub level: u32,
    /// IDs of known moves.
    #[serde(default)]
    pub moves: Vec<String>,
}

impl Combatant {
    /// Validates the combatant, returning all problems found.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.id.is_empty() {
            problems.push(format!("combatant {} has an empty id", self.name));
        }
        if self.max_health == 0 {
            problems.push(format!("combatant {} has no health", self.id));
        }
        if self.moves.len() > MAX_KNOWN_MOVES {
            problems.push(format!(
                "combatant {} knows {} moves, at most {MAX_KNOWN_MOVES} are allowed",
                self.id,
                self.moves.len()
            ));
        }
        let unique = self.moves.iter().collect::<FastHashSet<_>>();
        if unique.len() != self.moves.len() {
            problems.push(format!("combatant {} knows a move twice", self.id));
        }
        problems
    }
}

/// A combatant inside of a battle.
///
/// Owned by the [`BattleState`][`crate::battle::BattleState`] that contains it. Changes never flow
/// back to the persistent creature record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleParticipant {
    pub id: String,
    pub name: String,
    pub team: Team,
    pub health: u32,
    pub max_health: u32,
    pub action_points: u32,
    pub max_action_points: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub level: u32,
    pub moves: Vec<String>,
    pub status_effects: Vec<StatusEffectInstance>,
    pub modifiers: StatModifiers,
}

impl BattleParticipant {
    /// Creates a participant at full health and action points.
    pub fn new(combatant: Combatant, team: Team) -> Self {
        Self {
            id: combatant.id,
            name: combatant.name,
            team,
            health: combatant.max_health,
            max_health: combatant.max_health,
            action_points: combatant.max_action_points,
            max_action_points: combatant.max_action_points,
            attack: combatant.attack,
            defense: combatant.defense,
            speed: combatant.speed,
            level: combatant.level,
            moves: combatant.moves,
            status_effects: Vec::new(),
            modifiers: StatModifiers::default(),
        }
    }

    /// Has the participant fainted?
    pub fn fainted(&self) -> bool {
        self.health == 0
    }

    /// Does the participant know the move?
    pub fn knows_move(&self, move_id: &str) -> bool {
        self.moves.iter().any(|known| known == move_id)
    }

    /// Attack after modifiers.
    pub fn effective_attack(&self) -> f64 {
        self.attack as f64 * self.modifiers.attack
    }

    /// Defense after modifiers.
    pub fn effective_defense(&self) -> f64 {
        self.defense as f64 * self.modifiers.defense
    }

    /// Speed after modifiers.
    pub fn effective_speed(&self) -> f64 {
        self.speed as f64 * self.modifiers.speed
    }

    /// Subtracts health, stopping at zero. Returns the health actually lost.
    pub fn damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.health);
        self.health -= lost;
        lost
    }

    /// Restores health, stopping at the maximum. Returns the health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_health.saturating_sub(self.health));
        self.health += restored;
        restored
    }

    /// Restores action points, stopping at the maximum. Returns the points actually restored.
    pub fn restore_action_points(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_action_points.saturating_sub(self.action_points));
        self.action_points += restored;
        restored
    }

    /// Applies a status effect.
    ///
    /// A stackable effect that is already present gains one intensity and keeps the longer of
    /// the two durations. A non-stackable effect that is already present is left alone.
    pub fn apply_status_effect(&mut self, descriptor: &StatusEffectDescriptor) -> StatusApplication {
        let application = match self
            .status_effects
            .iter_mut()
            .find(|effect| effect.kind == descriptor.kind)
        {
            Some(existing) if descriptor.stackable => {
                existing.intensity += 1;
                existing.turns_remaining = existing.turns_remaining.max(descriptor.duration);
                StatusApplication::Stacked {
                    intensity: existing.intensity,
                }
            }
            Some(_) => StatusApplication::Ignored,
            None => {
                self.status_effects.push(StatusEffectInstance::new(
                    descriptor.kind,
                    descriptor.duration,
                ));
                StatusApplication::Applied
            }
        };
        if application.changed() {
            self.recalculate_modifiers();
        }
        application
    }

    /// Removes status effects of the given kind, or all status effects if no kind is given.
    ///
    /// Returns the number of effects removed.
    pub fn cure_status_effects(&mut self, kind: Option<StatusEffectKind>) -> usize {
        let before = self.status_effects.len();
        self.status_effects
            .retain(|effect| kind.is_some_and(|kind| effect.kind != kind));
        let removed = before - self.status_effects.len();
        if removed > 0 {
            self.recalculate_modifiers();
        }
        removed
    }

    /// Rebuilds stat modifiers from the active status effects.
    pub fn recalculate_modifiers(&mut self) {
        let mut modifiers = StatModifiers::default();
        for effect in &self.status_effects {
            if let Some((stat, factor)) = effect.kind.stat_modifier() {
                *modifiers.get_mut(stat) *= factor.powi(effect.intensity as i32);
            }
        }
        self.modifiers = modifiers;
    }
}

impl SpeedOrderable for BattleParticipant {
    fn speed(&self) -> u32 {
        self.speed
    }
}
