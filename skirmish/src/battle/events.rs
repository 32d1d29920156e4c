use anyhow::{
    Context,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::battle::{
    BattleKind,
    BattleResult,
    BattleState,
    Team,
};

/// Identity of a participant, as announced to the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantIdentity {
    pub id: String,
    pub name: String,
    pub team: Team,
}

/// A notification about a battle, pushed to the host after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleEvent {
    Started {
        battle: Uuid,
        kind: BattleKind,
        participants: Vec<ParticipantIdentity>,
    },
    Ended {
        battle: Uuid,
        result: BattleResult,
    },
}

impl BattleEvent {
    /// Announces a newly created battle.
    pub fn started(state: &BattleState) -> Self {
        Self::Started {
            battle: state.id(),
            kind: state.kind(),
            participants: state
                .participants()
                .iter()
                .map(|participant| ParticipantIdentity {
                    id: participant.id.clone(),
                    name: participant.name.clone(),
                    team: participant.team,
                })
                .collect(),
        }
    }

    /// Announces the result of a battle.
    ///
    /// Returns [`None`] if the battle has not ended.
    pub fn ended(state: &BattleState) -> Option<Self> {
        Some(Self::Ended {
            battle: state.id(),
            result: state.result()?.clone(),
        })
    }
}

/// Write-only destination for [`BattleEvent`]s.
///
/// Delivery failures are reported to the engine, which logs them and moves on. A battle never
/// rolls back because an event could not be delivered.
pub trait BattleEventSink: Send {
    fn emit(&mut self, event: BattleEvent) -> Result<()>;
}

impl<S> BattleEventSink for Box<S>
where
    S: BattleEventSink + ?Sized,
{
    fn emit(&mut self, event: BattleEvent) -> Result<()> {
        (**self).emit(event)
    }
}

/// A [`BattleEventSink`] that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventSink;

impl BattleEventSink for NoopEventSink {
    fn emit(&mut self, _: BattleEvent) -> Result<()> {
        Ok(())
    }
}

/// A [`BattleEventSink`] that pushes events into an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelEventSink {
    tx: mpsc::UnboundedSender<BattleEvent>,
}

impl ChannelEventSink {
    /// Creates a new sink, along with the receiving end of its channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<BattleEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Creates a new sink sending into an existing channel.
    pub fn from_sender(tx: mpsc::UnboundedSender<BattleEvent>) -> Self {
        Self { tx }
    }
}

impl BattleEventSink for ChannelEventSink {
    fn emit(&mut self, event: BattleEvent) -> Result<()> {
        self.tx
            .send(event)
            .context("battle event receiver was dropped")
    }
}
