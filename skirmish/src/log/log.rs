use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The kind of a [`BattleLogEntry`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum LogEntryKind {
    #[string = "move"]
    Move,
    #[string = "item"]
    Item,
    #[string = "flee"]
    Flee,
    #[string = "status"]
    Status,
    #[string = "other"]
    Other,
}

/// A battle event waiting to be stamped and appended to a [`BattleLog`].
///
/// The battle fills in the turn and timestamp when the event is logged.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    kind: LogEntryKind,
    actor: String,
    target: Option<String>,
    move_id: Option<String>,
    item_id: Option<String>,
    damage: Option<u32>,
    healing: Option<u32>,
    message: String,
    important: bool,
}

impl LogEvent {
    /// Creates a new event for the given actor.
    pub fn new<A, M>(kind: LogEntryKind, actor: A, message: M) -> Self
    where
        A: Into<String>,
        M: Into<String>,
    {
        Self {
            kind,
            actor: actor.into(),
            target: None,
            move_id: None,
            item_id: None,
            damage: None,
            healing: None,
            message: message.into(),
            important: false,
        }
    }

    pub fn with_target<S: Into<String>>(mut self, target: S) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_move<S: Into<String>>(mut self, move_id: S) -> Self {
        self.move_id = Some(move_id.into());
        self
    }

    pub fn with_item<S: Into<String>>(mut self, item_id: S) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    pub fn with_healing(mut self, healing: u32) -> Self {
        self.healing = Some(healing);
        self
    }

    /// Marks the event as important, so that consumers filtering noise still see it.
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }

    fn stamp(self, turn: u32, timestamp: u64) -> BattleLogEntry {
        BattleLogEntry {
            turn,
            timestamp,
            kind: self.kind,
            actor: self.actor,
            target: self.target,
            move_id: self.move_id,
            item_id: self.item_id,
            damage: self.damage,
            healing: self.healing,
            message: self.message,
            important: self.important,
        }
    }
}

/// A single entry of the [`BattleLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub turn: u32,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub kind: LogEntryKind,
    /// ID of the participant the entry is about.
    pub actor: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub move_id: Option<String>,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub damage: Option<u32>,
    #[serde(default)]
    pub healing: Option<u32>,
    /// Human-readable description.
    pub message: String,
    #[serde(default)]
    pub important: bool,
}

/// An append-only log of battle events.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleLog {
    entries: Vec<BattleLogEntry>,
}

impl BattleLog {
    /// Creates a new battle log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new event to the log.
    pub fn push(&mut self, turn: u32, timestamp: u64, event: LogEvent) -> &BattleLogEntry {
        self.entries.push(event.stamp(turn, timestamp));
        // Just pushed.
        &self.entries[self.entries.len() - 1]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[BattleLogEntry] {
        &self.entries
    }

    /// Entries starting at the given index.
    pub fn entries_since(&self, index: usize) -> &[BattleLogEntry] {
        &self.entries[index.min(self.entries.len())..]
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&BattleLogEntry> {
        self.entries.last()
    }

    /// Entries marked important.
    pub fn important_entries(&self) -> impl Iterator<Item = &BattleLogEntry> {
        self.entries.iter().filter(|entry| entry.important)
    }
}
