use std::sync::{
    Arc,
    Mutex,
};

use anyhow::{
    Error,
    Result,
};
use skirmish::battle::{
    BattleEvent,
    BattleEventSink,
};

/// A [`BattleEventSink`] that records every event it receives.
///
/// Clones share the same recording, so a test can keep one clone while the engine owns another.
#[derive(Debug, Default, Clone)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<BattleEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events received so far.
    pub fn events(&self) -> Vec<BattleEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl BattleEventSink for RecordingEventSink {
    fn emit(&mut self, event: BattleEvent) -> Result<()> {
        self.events
            .lock()
            .map_err(|_| Error::msg("event recording is poisoned"))?
            .push(event);
        Ok(())
    }
}

/// A [`BattleEventSink`] that fails every delivery.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingEventSink;

impl BattleEventSink for FailingEventSink {
    fn emit(&mut self, _: BattleEvent) -> Result<()> {
        Err(Error::msg("event channel is unavailable"))
    }
}
