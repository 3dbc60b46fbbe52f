//! Key-to-slot hashing.
//!
//! A [`SlotHash`] maps a string key to a bucket index in `[0, num_slots)`.
//! The mapping must be a pure function of the key bytes for as long as a
//! table uses it; tables never rehash, so a key always lands in the slot
//! it was inserted into.

use core::hash::BuildHasher;
use core::num::NonZeroUsize;
use hashbrown::hash_map::DefaultHashBuilder;

/// Strategy for choosing the bucket a key belongs to.
pub trait SlotHash {
    /// Returns an index strictly less than `num_slots`.
    fn slot(&self, key: &str, num_slots: NonZeroUsize) -> usize;
}

/// Bob Jenkins' one-at-a-time hash. Deterministic across runs and
/// platforms, so slot assignments can be reproduced from the keys alone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Jenkins;

impl SlotHash for Jenkins {
    #[inline]
    fn slot(&self, key: &str, num_slots: NonZeroUsize) -> usize {
        hash_jenkins(key, num_slots)
    }
}

/// One-at-a-time mix of `key`'s bytes, reduced modulo `num_slots`.
///
/// The state is a wrapping `u64`. Bytes are added as unsigned values, so
/// keys containing bytes `>= 0x80` (any non-ASCII UTF-8) hash differently
/// than under a signed-`char` implementation of the same mix.
pub fn hash_jenkins(key: &str, num_slots: NonZeroUsize) -> usize {
    let mut h: u64 = 0;
    for &b in key.as_bytes() {
        h = h.wrapping_add(u64::from(b));
        h = h.wrapping_add(h << 10);
        h ^= h >> 6;
    }
    h = h.wrapping_add(h << 3);
    h ^= h >> 11;
    h = h.wrapping_add(h << 15);
    (h % num_slots.get() as u64) as usize
}

/// Adapts any [`BuildHasher`] into a [`SlotHash`].
///
/// The builder is stored by value, so a table keeps one consistent mapping
/// for its whole life. Whether the mapping is stable across processes
/// depends on `S`.
#[derive(Clone, Debug, Default)]
pub struct BuildHasherSlots<S = DefaultHashBuilder> {
    hasher: S,
}

impl<S: BuildHasher> BuildHasherSlots<S> {
    pub fn new(hasher: S) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }
}

impl<S: BuildHasher> SlotHash for BuildHasherSlots<S> {
    #[inline]
    fn slot(&self, key: &str, num_slots: NonZeroUsize) -> usize {
        (self.hasher.hash_one(key.as_bytes()) % num_slots.get() as u64) as usize
    }
}
