mod clock;
mod data;
mod error_assert;
mod event_sink;
mod log_assert;
mod rng;
mod test_battle_builder;

pub use clock::FixedClock;
pub use data::{
    combatant,
    test_items,
    test_moves,
};
pub use error_assert::assert_error_message;
pub use event_sink::{
    FailingEventSink,
    RecordingEventSink,
};
pub use log_assert::assert_new_messages_eq;
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_engine,
};
pub use test_battle_builder::TestBattleBuilder;
