use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use skirmish::{
    battle::BattleEngine,
    rng::{
        PseudoRandomNumberGenerator,
        RealPseudoRandomNumberGenerator,
        rand_util,
    },
};

/// A controlled random number generator, for tests that need fine-grained control over battle RNG.
///
/// Fake values are keyed by sequence count, starting at 1 for the first value drawn.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        // Roll the underlying RNG to keep the sequence consistent, even if we do not use the value.
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(fake_entry) => fake_entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl ControlledRandomNumberGenerator {
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    /// Inserts a fake value that [`rand_util::unit`] reads as the given value in `[0, 1)`.
    pub fn insert_fake_unit_value(&mut self, count: usize, value: f64) {
        self.insert_fake_value(count, rand_util::raw_for_unit(value));
    }

    /// Inserts fake unit values, where each count is relative to the number of values drawn so
    /// far. A relative count of 1 is the next value drawn.
    pub fn insert_fake_unit_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let count = self.count;
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(relative, value)| (relative + count, rand_util::raw_for_unit(value))),
        );
    }
}

/// Returns the engine's generator if it is a [`ControlledRandomNumberGenerator`].
pub fn get_controlled_rng_for_engine(
    engine: &mut BattleEngine,
) -> Option<&mut ControlledRandomNumberGenerator> {
    engine
        .prng()
        .as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}

#[cfg(test)]
mod rng_test {
    use skirmish::rng::{
        PseudoRandomNumberGenerator,
        RealPseudoRandomNumberGenerator,
        rand_util,
    };

    use crate::ControlledRandomNumberGenerator;

    #[test]
    fn replaces_values_at_sequence_count() {
        let mut real = RealPseudoRandomNumberGenerator::new(Some(5));
        let mut controlled = ControlledRandomNumberGenerator::new(Some(5));
        controlled.insert_fake_value(2, 77);
        assert_eq!(controlled.next(), real.next());
        assert_eq!(controlled.next(), 77);
        real.next();
        assert_eq!(controlled.next(), real.next());
        assert_eq!(controlled.sequence_count(), 3);
    }

    #[test]
    fn unit_values_read_back() {
        let mut controlled = ControlledRandomNumberGenerator::new(None);
        controlled.next();
        controlled.insert_fake_unit_values_relative_to_sequence_count([(1, 0.25), (2, 0.75)]);
        assert_eq!(rand_util::unit(&mut controlled), 0.25);
        assert_eq!(rand_util::unit(&mut controlled), 0.75);
    }
}
