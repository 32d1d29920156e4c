use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use uuid::Uuid;

use crate::{
    battle::{
        BattleKind,
        BattleParticipant,
        BattleReward,
        RewardPayload,
        Team,
    },
    error::ValidationError,
    log::BattleLog,
};

/// The winner of a battle.
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
pub enum Winner {
    #[string = "self"]
    Player,
    #[string = "opponent"]
    Opponent,
    #[string = "draw"]
    Draw,
}

impl Winner {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Player => "self",
            Self::Opponent => "opponent",
            Self::Draw => "draw",
        }
    }
}

impl From<Team> for Winner {
    fn from(value: Team) -> Self {
        match value {
            Team::Player => Self::Player,
            Team::Opponent => Self::Opponent,
        }
    }
}

/// Why a battle ended, from the perspective of the host's participant.
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
pub enum EndReason {
    #[string = "victory"]
    Victory,
    #[string = "defeat"]
    Defeat,
    #[string = "flee"]
    Flee,
    #[string = "timeout"]
    Timeout,
}

impl EndReason {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Victory => "victory",
            Self::Defeat => "defeat",
            Self::Flee => "flee",
            Self::Timeout => "timeout",
        }
    }
}

/// The final result of a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub winner: Winner,
    /// Reason from the perspective of the host's participant.
    pub end_reason: EndReason,
    /// Full turn cycles elapsed.
    pub turns: u32,
    pub rewards: RewardPayload,
}

impl BattleResult {
    /// The end reason from the perspective of the given team.
    pub fn end_reason_for(&self, team: Team) -> EndReason {
        match (team, self.end_reason) {
            (Team::Player, reason) => reason,
            (Team::Opponent, EndReason::Victory) => EndReason::Defeat,
            (Team::Opponent, EndReason::Defeat) => EndReason::Victory,
            (Team::Opponent, reason) => reason,
        }
    }
}

/// The full state of a single battle.
///
/// Serializes verbatim, so a battle can be saved and later restored mid-fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub(crate) id: Uuid,
    pub(crate) kind: BattleKind,
    /// Milliseconds since the Unix epoch.
    pub(crate) started_at: u64,
    /// The host's participant, followed by the opponent.
    pub(crate) participants: [BattleParticipant; 2],
    /// Participant indices, fastest first.
    pub(crate) turn_order: Vec<usize>,
    /// Position in the turn order of the participant who acts next.
    pub(crate) turn_position: usize,
    pub(crate) turn: u32,
    pub(crate) turn_cap: u32,
    pub(crate) flee_allowed: bool,
    pub(crate) items_allowed: bool,
    pub(crate) log: BattleLog,
    pub(crate) reward: BattleReward,
    #[serde(default)]
    pub(crate) result: Option<BattleResult>,
}

impl BattleState {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> BattleKind {
        self.kind
    }

    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    pub fn participants(&self) -> &[BattleParticipant] {
        &self.participants
    }

    /// The host's participant.
    pub fn player(&self) -> &BattleParticipant {
        &self.participants[0]
    }

    pub fn opponent(&self) -> &BattleParticipant {
        &self.participants[1]
    }

    /// Looks up a participant by ID.
    pub fn participant(&self, id: &str) -> Option<&BattleParticipant> {
        self.participant_index(id).map(|index| &self.participants[index])
    }

    pub(crate) fn participant_index(&self, id: &str) -> Option<usize> {
        self.participants
            .iter()
            .position(|participant| participant.id == id)
    }

    pub(crate) fn current_index(&self) -> usize {
        self.turn_order[self.turn_position]
    }

    /// The participant who acts next.
    pub fn current_participant(&self) -> &BattleParticipant {
        &self.participants[self.current_index()]
    }

    pub fn turn_order(&self) -> &[usize] {
        &self.turn_order
    }

    /// Full turn cycles completed.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn turn_cap(&self) -> u32 {
        self.turn_cap
    }

    pub fn flee_allowed(&self) -> bool {
        self.flee_allowed
    }

    pub fn items_allowed(&self) -> bool {
        self.items_allowed
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub(crate) fn log_mut(&mut self) -> &mut BattleLog {
        &mut self.log
    }

    /// The reward table snapshotted when the battle started.
    pub fn reward(&self) -> &BattleReward {
        &self.reward
    }

    pub fn result(&self) -> Option<&BattleResult> {
        self.result.as_ref()
    }

    pub fn ended(&self) -> bool {
        self.result.is_some()
    }

    /// Checks that the state is internally consistent, as it may come from outside of the engine.
    pub(crate) fn validate(&self, error: &mut ValidationError) {
        let mut order = self.turn_order.clone();
        order.sort();
        if order != [0, 1] {
            error.add(format!("turn order {:?} is invalid", self.turn_order));
        }
        if self.turn_position >= self.turn_order.len() {
            error.add(format!("turn position {} is invalid", self.turn_position));
        }
        if self.participants[0].id == self.participants[1].id {
            error.add(format!(
                "participants share the id {}",
                self.participants[0].id
            ));
        }
        if self.participants[0].team != Team::Player || self.participants[1].team != Team::Opponent
        {
            error.add("participants are on the wrong teams");
        }
        for participant in &self.participants {
            if participant.max_health == 0 {
                error.add(format!("participant {} has no health", participant.id));
            }
            if participant.health > participant.max_health {
                error.add(format!("participant {} has too much health", participant.id));
            }
            if participant.action_points > participant.max_action_points {
                error.add(format!(
                    "participant {} has too many action points",
                    participant.id
                ));
            }
        }
    }
}
