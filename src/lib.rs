//! Flat array-backed binary min-heap priority queue
//!
//! This crate provides [`MinQueue`], a fixed-capacity binary min-heap mapping
//! numeric keys to numeric priorities, built for high-throughput push/pop
//! workloads (event schedulers, k-way merges, graph-search frontiers) where
//! the pointer chasing and per-node allocation of an object heap dominate
//! runtime.
//!
//! # Features
//!
//! - **Flat parallel arrays**: keys and priorities live in two fixed-width
//!   numeric arrays with a 1-based root, so parent/child arithmetic is a pure
//!   bit shift and no per-entry allocation ever happens
//! - **Deferred pop**: `pop` returns immediately and defers the heap repair
//!   to the next operation that needs a valid root; a pop followed by a push
//!   costs a single sift
//! - **Key tracking** (opt-in via [`KeyedMinQueue`]): a key → slot index
//!   giving O(1) membership tests, O(log n) removal of arbitrary keys, and
//!   push-as-update (decrease/increase-key) semantics
//! - **O(n) bulk construction** via bottom-up heapify
//! - **Capacity doubling** growth, gated by [`QueueOptions::auto_grow`]
//! - **Explicit storage widths**: keys and priorities are independently typed
//!   over the fixed-width [`Word`] storage types, with documented
//!   typed-array-style truncation for oversized values
//!
//! # Example
//!
//! ```rust
//! use minqueue::KeyedMinQueue;
//!
//! let mut frontier: KeyedMinQueue<u32, u32> = KeyedMinQueue::new(64);
//! frontier.push(7, 40).unwrap();
//! frontier.push(3, 25).unwrap();
//! frontier.push(7, 10).unwrap(); // decrease-key: updates key 7 in place
//!
//! assert_eq!(frontier.len(), 2);
//! assert_eq!(frontier.pop(), Some(7));
//! assert_eq!(frontier.pop(), Some(3));
//! ```
//!
//! # Thread safety
//!
//! The queue is not internally synchronized. It has a single owner at a time;
//! callers needing shared access must provide their own mutual exclusion.

pub mod error;
pub mod index;
pub mod queue;
pub mod word;

pub use error::QueueError;
pub use index::{KeySlotMap, SlotIndex, Untracked};
pub use queue::{KeyedMinQueue, MinQueue, QueueOptions, DEFAULT_CAPACITY};
pub use word::Word;
