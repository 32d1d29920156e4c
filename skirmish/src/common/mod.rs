mod clock;
mod hash;
#[cfg(test)]
mod test_util;

pub use clock::{
    Clock,
    SystemTimeClock,
};
pub use hash::{
    FastHashMap,
    FastHashSet,
};
#[cfg(test)]
pub use test_util::{
    test_deserialization,
    test_serialization,
    test_string_deserialization,
    test_string_serialization,
};
