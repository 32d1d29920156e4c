mod log;

pub use log::{
    BattleLog,
    BattleLogEntry,
    LogEntryKind,
    LogEvent,
};
