//! Flat binary min-heap priority queue
//!
//! A binary min-heap over two parallel fixed-width numeric arrays, mapping
//! keys to priorities. The layout is 1-based: slot 0 is unused so that for
//! any slot `i` the parent is `i >> 1` and the children are `i << 1` and
//! `(i << 1) + 1`, with no +1/-1 adjustment in the hot loops.
//!
//! Two optimizations beyond the textbook heap:
//!
//! - **Deferred pop**: [`pop`](MinQueue::pop) returns the root key without
//!   repairing the heap; the repair (move the last slot into the root and
//!   sift down) is paid by the next operation that needs a valid root. A pop
//!   immediately followed by a push does a single sift-down instead of a
//!   sift-down plus a sift-up.
//! - **Move-based sifts**: bubble-up and bubble-down carry the displaced
//!   (key, priority) pair in locals and shift parents/children into the hole,
//!   writing the carried pair once at its resting slot instead of swapping at
//!   every level.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity       |
//! |------------------|------------------|
//! | `push`           | O(log n)*        |
//! | `pop`            | O(log n) amortized (O(1) when a push follows) |
//! | `peek`           | O(1) amortized   |
//! | `remove`         | O(log n)         |
//! | `contains_key`   | O(1)             |
//! | `clear`          | O(1)             |
//! | `from_entries`   | O(n)             |
//!
//! *Amortized when auto-grow reallocates.
//!
//! # Example
//!
//! ```rust
//! use minqueue::MinQueue;
//!
//! let mut queue: MinQueue<u32, u32> = MinQueue::new(16);
//! queue.push(1, 30).unwrap();
//! queue.push(2, 10).unwrap();
//! queue.push(3, 20).unwrap();
//!
//! assert_eq!(queue.peek(), Some(2));
//! assert_eq!(queue.pop(), Some(2));
//! assert_eq!(queue.pop(), Some(3));
//! assert_eq!(queue.pop(), Some(1));
//! assert_eq!(queue.pop(), None);
//! ```
//!
//! With key tracking, pushing an existing key updates its priority and
//! [`remove`](MinQueue::remove) deletes arbitrary keys:
//!
//! ```rust
//! use minqueue::KeyedMinQueue;
//!
//! let mut queue: KeyedMinQueue<u32, u32> = KeyedMinQueue::new(16);
//! queue.push(7, 50).unwrap();
//! queue.push(7, 5).unwrap();   // decrease-key, not a duplicate
//! assert_eq!(queue.len(), 1);
//! assert_eq!(queue.peek_priority(), Some(5));
//! ```

use crate::error::QueueError;
use crate::index::{KeySlotMap, SlotIndex, Untracked};
use crate::word::Word;

/// First live slot. The 1-based layout makes parent/child pure bit shifts.
const ROOT: usize = 1;

/// Capacity used by [`MinQueue::default`]
pub const DEFAULT_CAPACITY: usize = 64;

/// Construction options for [`MinQueue`]
///
/// Key tracking and storage widths are type parameters of the queue itself;
/// only the growth policy remains a runtime choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueOptions {
    /// Whether a push beyond capacity doubles storage instead of failing
    /// with [`QueueError::CapacityExceeded`]. Defaults to `true`.
    pub auto_grow: bool,
}

impl Default for QueueOptions {
    fn default() -> Self {
        Self { auto_grow: true }
    }
}

/// A binary min-heap priority queue over parallel flat arrays.
///
/// `K` and `P` are the fixed-width storage words for keys and priorities
/// (see [`Word`]); `I` selects the key-tracking strategy:
///
/// - [`Untracked`] (the default): no key index. Duplicate keys may coexist;
///   `remove` is a no-op and `contains_key` always answers `false`.
/// - [`KeySlotMap`]: a key → slot hash index kept in sync on every slot
///   write, enabling O(1) membership tests, O(log n) removal of arbitrary
///   keys, and push-as-update semantics. See [`KeyedMinQueue`].
///
/// The queue is not internally synchronized; wrap it in a mutex for shared
/// access. Growth invalidates raw slices previously obtained from
/// [`raw_keys`](Self::raw_keys)/[`raw_priorities`](Self::raw_priorities)
/// (the borrow checker enforces this), never the queue itself.
#[derive(Debug, Clone)]
pub struct MinQueue<K: Word, P: Word, I: SlotIndex<K> = Untracked> {
    /// Key storage; slot 0 unused, live entries at `ROOT..ROOT + size`
    keys: Vec<K>,
    /// Priority storage, parallel to `keys`
    priorities: Vec<P>,
    /// Live entry count; stale slots beyond it are never read
    size: usize,
    capacity: usize,
    auto_grow: bool,
    /// When set, the root slot holds a stale already-popped entry and the
    /// last live entry sits at `ROOT + size`; `settle_pending` repairs this.
    pending_pop: bool,
    index: I,
}

/// A [`MinQueue`] with key tracking enabled.
pub type KeyedMinQueue<K, P> = MinQueue<K, P, KeySlotMap<K>>;

impl<K: Word, P: Word, I: SlotIndex<K>> MinQueue<K, P, I> {
    /// Creates an empty queue with storage for `capacity` entries and
    /// auto-grow enabled.
    pub fn new(capacity: usize) -> Self {
        Self::with_options(capacity, QueueOptions::default())
    }

    /// Creates an empty queue with the given growth policy.
    pub fn with_options(capacity: usize, options: QueueOptions) -> Self {
        Self {
            keys: vec![K::default(); capacity + ROOT],
            priorities: vec![P::default(); capacity + ROOT],
            size: 0,
            capacity,
            auto_grow: options.auto_grow,
            pending_pop: false,
            index: I::default(),
        }
    }

    /// Creates a queue pre-seeded with the given entries.
    ///
    /// The batch is bulk-loaded and repaired bottom-up, which is O(n) rather
    /// than the O(n log n) of n sequential pushes. If the batch is longer
    /// than `capacity`, the effective capacity is raised to fit; supplying
    /// well-formed initial data never fails.
    ///
    /// With key tracking enabled the batch keys should be distinct; when they
    /// are not, the index keeps the last occurrence and the queue behaves as
    /// if the earlier ones were untracked.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::LengthMismatch`] if the slices differ in length.
    pub fn from_entries(
        capacity: usize,
        keys: &[K],
        priorities: &[P],
    ) -> Result<Self, QueueError> {
        Self::from_entries_with_options(capacity, keys, priorities, QueueOptions::default())
    }

    /// [`from_entries`](Self::from_entries) with an explicit growth policy.
    pub fn from_entries_with_options(
        capacity: usize,
        keys: &[K],
        priorities: &[P],
        options: QueueOptions,
    ) -> Result<Self, QueueError> {
        if keys.len() != priorities.len() {
            return Err(QueueError::LengthMismatch {
                keys: keys.len(),
                priorities: priorities.len(),
            });
        }
        let mut queue = Self::with_options(capacity.max(keys.len()), options);
        for (offset, (&key, &priority)) in keys.iter().zip(priorities).enumerate() {
            queue.write_slot(ROOT + offset, key, priority);
        }
        queue.size = keys.len();
        // bottom-up heapify: repair every internal slot, deepest first
        for slot in (ROOT..=queue.size / 2).rev() {
            queue.bubble_down(slot);
        }
        Ok(queue)
    }

    /// Number of live entries
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the queue holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Allocated slot count; always `>= len()`
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts an entry, or updates its priority when key tracking is
    /// enabled and `key` is already present.
    ///
    /// If an earlier [`pop`](Self::pop) left a deferred repair outstanding,
    /// the new entry is written straight into the stale root slot and sifted
    /// down, collapsing the deferred settle and the insert into one sift.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::CapacityExceeded`] if the queue is full and
    /// auto-grow is disabled; the queue is left unchanged.
    pub fn push(&mut self, key: K, priority: P) -> Result<(), QueueError> {
        if I::TRACKS_KEYS && self.index.slot_of(&key).is_some() {
            self.remove(key);
        }
        if self.size == self.capacity && !self.pending_pop {
            if !self.auto_grow {
                return Err(QueueError::CapacityExceeded {
                    capacity: self.capacity,
                });
            }
            self.grow();
        }
        if self.pending_pop {
            // reuse the stale root slot: one sift-down instead of settle + sift-up
            self.pending_pop = false;
            self.write_slot(ROOT, key, priority);
            self.size += 1;
            self.bubble_down(ROOT);
        } else {
            let slot = ROOT + self.size;
            self.write_slot(slot, key, priority);
            self.size += 1;
            self.bubble_up(slot);
        }
        Ok(())
    }

    /// [`push`](Self::push) with typed-array-store narrowing.
    ///
    /// Both values are narrowed to the storage words via
    /// [`Word::truncate_from`]: integer words silently keep the low bits
    /// (a `u32`-keyed queue stores `1 << 32` as `0`), float words convert
    /// numerically. This mirrors what storing an oversized value into a
    /// fixed-width array does and is a documented contract, not an error.
    ///
    /// # Errors
    ///
    /// Same as [`push`](Self::push).
    pub fn push_truncating(&mut self, key: u64, priority: u64) -> Result<(), QueueError> {
        self.push(K::truncate_from(key), P::truncate_from(priority))
    }

    /// Removes and returns the minimum-priority key, or `None` when empty.
    ///
    /// The heap repair is deferred: the root slot is left stale and repaired
    /// by whichever operation next needs a valid root. A push that follows
    /// immediately absorbs the repair into its own sift-down.
    pub fn pop(&mut self) -> Option<K> {
        if self.size == 0 {
            return None;
        }
        if self.pending_pop {
            // two pops in a row: the previous repair must land first
            self.settle_pending();
        }
        let key = self.keys[ROOT];
        self.size -= 1;
        self.pending_pop = true;
        self.index.forget(&key);
        Some(key)
    }

    /// Returns the minimum-priority key without removing it.
    ///
    /// Settles any outstanding deferred pop first, hence `&mut self`.
    pub fn peek(&mut self) -> Option<K> {
        if self.size == 0 {
            return None;
        }
        if self.pending_pop {
            self.settle_pending();
        }
        Some(self.keys[ROOT])
    }

    /// Returns the priority of the minimum entry without removing it.
    ///
    /// Settles any outstanding deferred pop first, hence `&mut self`.
    pub fn peek_priority(&mut self) -> Option<P> {
        if self.size == 0 {
            return None;
        }
        if self.pending_pop {
            self.settle_pending();
        }
        Some(self.priorities[ROOT])
    }

    /// Removes the entry with the given key, if present.
    ///
    /// Requires key tracking ([`KeyedMinQueue`]); on an untracked queue this
    /// is a no-op, as is removing a key that is not a member.
    ///
    /// The vacated slot is refilled with the last live entry, which is then
    /// sifted in whichever direction its new neighborhood demands; only one
    /// direction can be violated after a single replace-and-truncate.
    pub fn remove(&mut self, key: K) {
        if !I::TRACKS_KEYS {
            return;
        }
        if self.pending_pop {
            // the index refers to settled slots; bring the arrays up to date
            self.settle_pending();
        }
        let Some(slot) = self.index.slot_of(&key) else {
            return;
        };
        self.index.forget(&key);
        self.size -= 1;
        let last = ROOT + self.size;
        if slot == last {
            return;
        }
        let (moved_key, moved_priority) = (self.keys[last], self.priorities[last]);
        self.write_slot(slot, moved_key, moved_priority);
        if slot > ROOT && self.priorities[slot] < self.priorities[slot >> 1] {
            self.bubble_up(slot);
        } else {
            self.bubble_down(slot);
        }
    }

    /// O(1) membership test via the key index.
    ///
    /// Always `false` on an untracked queue.
    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        self.index.slot_of(&key).is_some()
    }

    /// Removes all entries in O(1).
    ///
    /// Backing storage is retained and reused; stale slot contents are never
    /// observed because every read is bounded by `len()`.
    pub fn clear(&mut self) {
        self.size = 0;
        self.pending_pop = false;
        self.index.clear();
    }

    /// Live keys in heap order (root first, *not* sorted).
    ///
    /// Settles any outstanding deferred pop first. Intended for debugging
    /// and tests; only the root is guaranteed minimal.
    pub fn raw_keys(&mut self) -> &[K] {
        if self.pending_pop {
            self.settle_pending();
        }
        &self.keys[ROOT..ROOT + self.size]
    }

    /// Live priorities in heap order (root first, *not* sorted).
    ///
    /// Settles any outstanding deferred pop first.
    pub fn raw_priorities(&mut self) -> &[P] {
        if self.pending_pop {
            self.settle_pending();
        }
        &self.priorities[ROOT..ROOT + self.size]
    }

    /// Repair the heap after a deferred pop: move the last live entry into
    /// the stale root slot and sift it down.
    fn settle_pending(&mut self) {
        debug_assert!(self.pending_pop);
        self.pending_pop = false;
        if self.size == 0 {
            return;
        }
        // with the marker set, live entries occupy ROOT + 1 ..= ROOT + size
        let last = ROOT + self.size;
        let (key, priority) = (self.keys[last], self.priorities[last]);
        self.write_slot(ROOT, key, priority);
        self.bubble_down(ROOT);
    }

    /// Write a (key, priority) pair into a slot, keeping the index in sync.
    #[inline]
    fn write_slot(&mut self, slot: usize, key: K, priority: P) {
        self.keys[slot] = key;
        self.priorities[slot] = priority;
        self.index.record(key, slot);
    }

    /// Move the entry at `slot` toward the root until its parent is no
    /// larger. Strict `>` on the parent: ties do not move.
    fn bubble_up(&mut self, mut slot: usize) {
        let key = self.keys[slot];
        let priority = self.priorities[slot];

        while slot > ROOT {
            let parent = slot >> 1;
            if self.priorities[parent] <= priority {
                break;
            }
            // shift the parent down into the hole and ascend
            let (parent_key, parent_priority) = (self.keys[parent], self.priorities[parent]);
            self.write_slot(slot, parent_key, parent_priority);
            slot = parent;
        }

        self.write_slot(slot, key, priority);
    }

    /// Move the entry at `slot` toward the leaves until neither child is
    /// smaller. The left child wins ties against the right.
    fn bubble_down(&mut self, mut slot: usize) {
        let key = self.keys[slot];
        let priority = self.priorities[slot];
        let last = ROOT + self.size - 1;

        loop {
            let left = slot << 1;
            if left > last {
                break; // leaf
            }
            let mut child = left;
            let mut child_priority = self.priorities[left];

            let right = left + 1;
            if right <= last {
                let right_priority = self.priorities[right];
                if right_priority < child_priority {
                    child = right;
                    child_priority = right_priority;
                }
            }

            if child_priority >= priority {
                break;
            }
            // shift the smaller child up into the hole and descend
            let child_key = self.keys[child];
            self.write_slot(slot, child_key, child_priority);
            slot = child;
        }

        self.write_slot(slot, key, priority);
    }

    /// Double the backing storage, copying live slots.
    fn grow(&mut self) {
        let new_capacity = (self.capacity * 2).max(1);
        self.keys.resize(new_capacity + ROOT, K::default());
        self.priorities.resize(new_capacity + ROOT, P::default());
        self.capacity = new_capacity;
    }
}

impl<K: Word, P: Word, I: SlotIndex<K>> Default for MinQueue<K, P, I> {
    /// An empty queue with [`DEFAULT_CAPACITY`] slots and auto-grow enabled.
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
