//! Pluggable key → slot bookkeeping for the queue
//!
//! This module provides a trait abstraction over the key index that backs
//! arbitrary removal and push-as-update semantics:
//!
//! - [`Untracked`]: Default no-op variant; every hook compiles away, keys are
//!   never looked up, and duplicate keys may coexist in the heap.
//! - [`KeySlotMap`]: Hash-map variant mapping each live key to the slot it
//!   currently occupies, enabling O(1) membership tests and O(log n)
//!   [`remove`](crate::MinQueue::remove).
//!
//! # Design
//!
//! The queue notifies its index on *every* slot write (sift moves included),
//! so the index always agrees with the arrays. Selecting the variant at the
//! type level instead of branching on an `Option<HashMap>` keeps the
//! untracked fast path free of per-write checks.
//!
//! The tracked variant uses [`rustc_hash::FxHashMap`]; key→position lookups
//! sit on the hot path of every tracked push, and FxHash is markedly cheaper
//! than SipHash for small integer keys.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Bookkeeping strategy mapping keys to the slots they occupy.
///
/// Implementations must uphold: after `record(k, i)`, `slot_of(k)` returns
/// `Some(i)` until a later `record` or `forget` for `k`; `slot_of` never
/// returns a slot the key does not occupy.
pub trait SlotIndex<K>: Default {
    /// Whether this index actually tracks keys (false for [`Untracked`])
    const TRACKS_KEYS: bool;

    /// Note that `key` now occupies `slot`
    fn record(&mut self, key: K, slot: usize);

    /// Note that `key` no longer occupies any slot
    fn forget(&mut self, key: &K);

    /// The slot currently occupied by `key`, if any
    fn slot_of(&self, key: &K) -> Option<usize>;

    /// Drop all entries
    fn clear(&mut self);
}

/// No-op index: key tracking disabled.
///
/// All hooks are empty and `slot_of` always answers `None`, so
/// `remove`/`contains_key` degrade to no-ops exactly as the queue contract
/// specifies for untracked queues.
#[derive(Debug, Default, Clone, Copy)]
pub struct Untracked;

impl<K> SlotIndex<K> for Untracked {
    const TRACKS_KEYS: bool = false;

    #[inline]
    fn record(&mut self, _key: K, _slot: usize) {}

    #[inline]
    fn forget(&mut self, _key: &K) {}

    #[inline]
    fn slot_of(&self, _key: &K) -> Option<usize> {
        None
    }

    #[inline]
    fn clear(&mut self) {}
}

/// Hash-map index: one entry per live key.
#[derive(Debug, Clone)]
pub struct KeySlotMap<K> {
    slots: FxHashMap<K, usize>,
}

// Hand-written so the impl holds for any `K`: the derive would demand
// `K: Default`, which key types never need (the map starts empty).
impl<K> Default for KeySlotMap<K> {
    fn default() -> Self {
        Self {
            slots: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash> SlotIndex<K> for KeySlotMap<K> {
    const TRACKS_KEYS: bool = true;

    #[inline]
    fn record(&mut self, key: K, slot: usize) {
        self.slots.insert(key, slot);
    }

    #[inline]
    fn forget(&mut self, key: &K) {
        self.slots.remove(key);
    }

    #[inline]
    fn slot_of(&self, key: &K) -> Option<usize> {
        self.slots.get(key).copied()
    }

    #[inline]
    fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untracked_answers_nothing() {
        let mut index = Untracked;
        <Untracked as SlotIndex<u32>>::record(&mut index, 1, 5);
        assert_eq!(<Untracked as SlotIndex<u32>>::slot_of(&index, &1), None);
    }

    #[test]
    fn test_key_slot_map_tracks_latest_slot() {
        let mut index: KeySlotMap<u32> = KeySlotMap::default();
        index.record(7, 3);
        assert_eq!(index.slot_of(&7), Some(3));

        index.record(7, 1);
        assert_eq!(index.slot_of(&7), Some(1));

        index.forget(&7);
        assert_eq!(index.slot_of(&7), None);
    }

    #[test]
    fn test_key_slot_map_works_without_default_keys() {
        // key types need Eq + Hash but not Default
        #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
        struct Opaque(u32);

        let mut index: KeySlotMap<Opaque> = KeySlotMap::default();
        index.record(Opaque(1), 4);
        assert_eq!(index.slot_of(&Opaque(1)), Some(4));
        index.forget(&Opaque(1));
        assert_eq!(index.slot_of(&Opaque(1)), None);
    }

    #[test]
    fn test_key_slot_map_clear() {
        let mut index: KeySlotMap<u32> = KeySlotMap::default();
        index.record(1, 1);
        index.record(2, 2);
        index.clear();
        assert_eq!(index.slot_of(&1), None);
        assert_eq!(index.slot_of(&2), None);
    }
}
