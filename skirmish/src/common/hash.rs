use std::collections::{
    HashMap,
    HashSet,
};

/// Hash map keyed with `ahash`, for registries and inventories.
pub type FastHashMap<K, V> = HashMap<K, V, ahash::RandomState>;
/// Hash set keyed with `ahash`.
pub type FastHashSet<V> = HashSet<V, ahash::RandomState>;
