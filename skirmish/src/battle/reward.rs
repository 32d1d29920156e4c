use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use skirmish_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::{
        BattleKind,
        BattleParticipant,
        EndReason,
    },
    config::{
        BattleConfig,
        Tuning,
    },
};

/// An item that may drop when a battle is won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropCandidate {
    /// Item ID.
    pub item: String,
    /// Percentage chance, from 0 to 100, that the item drops.
    pub chance: f64,
    pub quantity: u32,
}

impl DropCandidate {
    pub fn new<S: Into<String>>(item: S, chance: f64, quantity: u32) -> Self {
        Self {
            item: item.into(),
            chance,
            quantity,
        }
    }
}

/// A rare reward granted outside of the normal drop table.
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
pub enum SpecialRewardKind {
    #[string = "RareFragment"]
    RareFragment,
    #[string = "RareEncounter"]
    RareEncounter,
    #[string = "MoveUnlock"]
    MoveUnlock,
}

impl SpecialRewardKind {
    /// Can the reward be granted for the given kind of battle?
    pub fn available_in(&self, kind: BattleKind) -> bool {
        match self {
            Self::RareFragment => matches!(kind, BattleKind::Arena | BattleKind::Event),
            Self::RareEncounter => matches!(kind, BattleKind::Wild),
            Self::MoveUnlock => matches!(kind, BattleKind::Trainer | BattleKind::Arena),
        }
    }

    fn chance(&self, tuning: &Tuning) -> f64 {
        match self {
            Self::RareFragment => tuning.rare_fragment_chance,
            Self::RareEncounter => tuning.rare_encounter_chance,
            Self::MoveUnlock => tuning.move_unlock_chance,
        }
    }
}

/// A special reward that may be granted when a battle is won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialRewardCandidate {
    pub kind: SpecialRewardKind,
    /// Percentage chance, from 0 to 100.
    pub chance: f64,
}

/// The reward table of a battle, snapshotted when the battle starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleReward {
    pub experience: u32,
    pub currency: u32,
    #[serde(default)]
    pub drops: Vec<DropCandidate>,
    #[serde(default)]
    pub specials: Vec<SpecialRewardCandidate>,
}

/// An item granted at the end of a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardItem {
    pub item: String,
    pub quantity: u32,
}

/// The rewards actually granted at the end of a battle.
///
/// The host applies these to its persistent records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardPayload {
    pub experience: u32,
    pub currency: u32,
    #[serde(default)]
    pub items: Vec<RewardItem>,
    #[serde(default)]
    pub special_rewards: Vec<SpecialRewardKind>,
}

impl RewardPayload {
    /// Is nothing granted?
    pub fn is_empty(&self) -> bool {
        self.experience == 0
            && self.currency == 0
            && self.items.is_empty()
            && self.special_rewards.is_empty()
    }
}

fn scale(base: u32, multiplier: f64) -> u32 {
    (base as f64 * multiplier).round() as u32
}

/// Generates the reward table for a battle against the given opponent.
pub fn generate_reward_table(
    tuning: &Tuning,
    config: &BattleConfig,
    opponent: &BattleParticipant,
) -> BattleReward {
    let multiplier = config.reward_multiplier();
    let specials = if opponent.level >= tuning.special_reward_level {
        [
            SpecialRewardKind::RareFragment,
            SpecialRewardKind::RareEncounter,
            SpecialRewardKind::MoveUnlock,
        ]
        .into_iter()
        .filter(|kind| kind.available_in(config.kind))
        .map(|kind| SpecialRewardCandidate {
            kind,
            chance: kind.chance(tuning),
        })
        .collect()
    } else {
        Vec::new()
    };
    BattleReward {
        experience: scale(tuning.base_experience, multiplier),
        currency: scale(tuning.base_currency, multiplier),
        drops: config.drops.clone(),
        specials,
    }
}

/// Rolls every drop candidate independently, in order.
pub fn roll_drops(
    prng: &mut dyn PseudoRandomNumberGenerator,
    drops: &[DropCandidate],
) -> Vec<RewardItem> {
    drops
        .iter()
        .filter(|drop| rand_util::percent_chance(prng, drop.chance))
        .map(|drop| RewardItem {
            item: drop.item.clone(),
            quantity: drop.quantity,
        })
        .collect()
}

/// Rolls every special reward candidate independently, in order.
pub fn roll_special_rewards(
    prng: &mut dyn PseudoRandomNumberGenerator,
    specials: &[SpecialRewardCandidate],
) -> Vec<SpecialRewardKind> {
    specials
        .iter()
        .filter(|special| rand_util::percent_chance(prng, special.chance))
        .map(|special| special.kind)
        .collect()
}

/// Finalizes the rewards for a battle that ended for the given reason, from the perspective of the
/// host's participant.
///
/// Only a victory consumes randomness.
pub fn roll_rewards(
    prng: &mut dyn PseudoRandomNumberGenerator,
    table: &BattleReward,
    tuning: &Tuning,
    reason: EndReason,
) -> RewardPayload {
    match reason {
        EndReason::Victory => {
            let items = roll_drops(prng, &table.drops);
            let special_rewards = roll_special_rewards(prng, &table.specials);
            RewardPayload {
                experience: table.experience,
                currency: table.currency,
                items,
                special_rewards,
            }
        }
        EndReason::Timeout => RewardPayload {
            experience: scale(table.experience, tuning.draw_experience_ratio),
            ..Default::default()
        },
        EndReason::Defeat | EndReason::Flee => RewardPayload::default(),
    }
}
