use crate::PseudoRandomNumberGenerator;

const UNIT_DENOMINATOR: f64 = 4294967296.0;

/// Returns a uniform value in the range `[0, 1)`.
pub fn unit(prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
    (prng.next() & 0xFFFF_FFFF) as f64 / UNIT_DENOMINATOR
}

/// Returns the raw generator output that [`unit`] maps to the given value.
///
/// Values are clamped to `[0, 1)`. Useful for forcing specific rolls in tests.
pub fn raw_for_unit(value: f64) -> u64 {
    let value = value.clamp(0.0, 1.0);
    ((value * UNIT_DENOMINATOR) as u64).min(u32::MAX as u64)
}

/// Returns whether a random event with the given percentage chance occurs.
///
/// Succeeds iff `unit() * 100 < percent`, so a chance of 0 never succeeds and a chance of 100
/// always does.
pub fn percent_chance(prng: &mut dyn PseudoRandomNumberGenerator, percent: f64) -> bool {
    unit(prng) * 100.0 < percent
}
