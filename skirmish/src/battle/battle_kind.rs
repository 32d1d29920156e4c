use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The kind of encounter a battle represents.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum BattleKind {
    /// A creature met in the wild.
    #[string = "Wild"]
    #[default]
    Wild,
    /// Another tamer's creature.
    #[string = "Trainer"]
    Trainer,
    /// A ranked arena match.
    #[string = "Arena"]
    Arena,
    /// A special, time-limited event.
    #[string = "Event"]
    Event,
}

impl BattleKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wild => "wild",
            Self::Trainer => "trainer",
            Self::Arena => "arena",
            Self::Event => "event",
        }
    }

    /// Is fleeing allowed when the battle configuration does not say otherwise?
    pub fn allows_flee(&self) -> bool {
        match self {
            Self::Wild | Self::Event => true,
            Self::Trainer | Self::Arena => false,
        }
    }

    /// Are items allowed when the battle configuration does not say otherwise?
    pub fn allows_items(&self) -> bool {
        match self {
            Self::Arena => false,
            _ => true,
        }
    }

    /// Multiplier for experience and currency rewards when the battle configuration does not
    /// supply one.
    pub fn default_reward_multiplier(&self) -> f64 {
        match self {
            Self::Wild => 1.0,
            Self::Trainer => 1.5,
            Self::Arena => 2.0,
            Self::Event => 1.25,
        }
    }
}
