//! Error type for queue operations

use std::fmt;

/// Error type for queue operations
///
/// All failures are reported synchronously at the point of violation and
/// leave the queue unchanged. Popping or peeking an empty queue is *not* an
/// error; those operations answer `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The key and priority slices supplied at construction differ in length
    LengthMismatch {
        /// Number of keys supplied
        keys: usize,
        /// Number of priorities supplied
        priorities: usize,
    },
    /// A push found the queue full with auto-grow disabled
    CapacityExceeded {
        /// Capacity at the time of the failed push
        capacity: usize,
    },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::LengthMismatch { keys, priorities } => {
                write!(
                    f,
                    "number of keys ({keys}) does not match number of priorities ({priorities})"
                )
            }
            QueueError::CapacityExceeded { capacity } => {
                write!(
                    f,
                    "queue has reached its capacity ({capacity}) and auto-grow is disabled"
                )
            }
        }
    }
}

impl std::error::Error for QueueError {}
