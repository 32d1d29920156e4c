use std::time::{
    SystemTime,
    UNIX_EPOCH,
};

/// A clock used to read the current time to attach to the battle log.
pub trait Clock: Send + Sync {
    /// The current timestamp, in milliseconds since the Unix epoch.
    fn now(&self) -> u64;
}

/// A [`Clock`] backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeClock;

impl Clock for SystemTimeClock {
    fn now(&self) -> u64 {
        // A clock set before the epoch reads as zero rather than failing the battle.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_millis() as u64)
            .unwrap_or(0)
    }
}
