use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A stat that can be scaled by a status effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifiedStat {
    Attack,
    Defense,
    Speed,
    Accuracy,
    Evasion,
}

/// The kind of a status effect.
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
pub enum StatusEffectKind {
    /// Loses health every turn cycle.
    #[string = "Poisoned"]
    Poisoned,
    /// Loses health every turn cycle and deals less damage.
    #[string = "Burned"]
    Burned,
    #[string = "Weakened"]
    Weakened,
    #[string = "Armored"]
    Armored,
    #[string = "Slowed"]
    Slowed,
    #[string = "Blinded"]
    Blinded,
    #[string = "Evasive"]
    Evasive,
}

impl StatusEffectKind {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Poisoned => "poisoned",
            Self::Burned => "burned",
            Self::Weakened => "weakened",
            Self::Armored => "armored",
            Self::Slowed => "slowed",
            Self::Blinded => "blinded",
            Self::Evasive => "evasive",
        }
    }

    /// Does the effect damage its holder every turn cycle?
    pub fn deals_damage_over_time(&self) -> bool {
        match self {
            Self::Poisoned | Self::Burned => true,
            _ => false,
        }
    }

    /// The stat scaled by the effect and the factor applied per point of intensity.
    pub fn stat_modifier(&self) -> Option<(ModifiedStat, f64)> {
        match self {
            Self::Poisoned => None,
            Self::Burned | Self::Weakened => Some((ModifiedStat::Attack, 0.75)),
            Self::Armored => Some((ModifiedStat::Defense, 1.5)),
            Self::Slowed => Some((ModifiedStat::Speed, 0.5)),
            Self::Blinded => Some((ModifiedStat::Accuracy, 0.75)),
            Self::Evasive => Some((ModifiedStat::Evasion, 1.25)),
        }
    }
}

/// An active status effect on a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffectInstance {
    pub kind: StatusEffectKind,
    /// Full turn cycles left before the effect is removed.
    pub turns_remaining: u32,
    /// Stacking counter. Starts at 1.
    pub intensity: u32,
}

impl StatusEffectInstance {
    pub fn new(kind: StatusEffectKind, duration: u32) -> Self {
        Self {
            kind,
            turns_remaining: duration,
            intensity: 1,
        }
    }
}

/// What happened when a status effect was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusApplication {
    /// The effect was newly added.
    Applied,
    /// The effect was already present and stacked.
    Stacked { intensity: u32 },
    /// The effect was already present and does not stack.
    Ignored,
}

impl StatusApplication {
    /// Did the application change the participant?
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[cfg(test)]
mod status_test {
    use crate::{
        battle::{
            ModifiedStat,
            StatusEffectKind,
        },
        common::test_string_serialization,
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(StatusEffectKind::Poisoned, "Poisoned");
        test_string_serialization(StatusEffectKind::Evasive, "Evasive");
    }

    #[test]
    fn only_poison_and_burn_deal_damage_over_time() {
        assert!(StatusEffectKind::Poisoned.deals_damage_over_time());
        assert!(StatusEffectKind::Burned.deals_damage_over_time());
        assert!(!StatusEffectKind::Slowed.deals_damage_over_time());
        assert_eq!(
            StatusEffectKind::Slowed.stat_modifier(),
            Some((ModifiedStat::Speed, 0.5))
        );
        assert_eq!(StatusEffectKind::Poisoned.stat_modifier(), None);
    }
}
