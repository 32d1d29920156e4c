use std::cmp::Ordering;

/// An object that can be ordered by speed.
pub trait SpeedOrderable {
    /// Speed. Highest speed goes first.
    fn speed(&self) -> u32;
}

impl<T> SpeedOrderable for &'_ T
where
    T: SpeedOrderable,
{
    #[inline]
    fn speed(&self) -> u32 {
        (*self).speed()
    }
}

/// Compares the speed of two objects, so that the faster object sorts first.
pub fn compare_speed<T>(a: &T, b: &T) -> Ordering
where
    T: SpeedOrderable,
{
    // Higher speed first.
    b.speed().cmp(&a.speed())
}

/// Computes the turn order of the given items, as indices into the slice.
///
/// Faster items go first. Ties keep their original order, so the result is fully deterministic
/// and consumes no randomness.
pub fn turn_order<T>(items: &[T]) -> Vec<usize>
where
    T: SpeedOrderable,
{
    let mut order = (0..items.len()).collect::<Vec<_>>();
    // `sort_by` is stable.
    order.sort_by(|a, b| compare_speed(&items[*a], &items[*b]));
    order
}
