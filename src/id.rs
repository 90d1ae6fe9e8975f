//! Session identifier allocation.

use crate::session::SessionId;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Inclusive lower bound of the id space; keeps every id six digits.
const ID_MIN: u32 = 100_000;
/// Exclusive upper bound of the id space.
const ID_MAX: u32 = 1_000_000;

/// Produces short, human-shareable session ids.
///
/// Ids are six-digit decimal numerals drawn at random and retried on
/// collision against the currently live sessions. The caller must hold
/// the table lock across allocation and insertion, otherwise two
/// concurrent creations could claim the same id.
#[derive(Debug, Default)]
pub struct IdAllocator;

impl IdAllocator {
    /// Creates an allocator.
    pub fn new() -> Self {
        Self
    }

    /// Returns a fresh id absent from `live`.
    ///
    /// The live table is tiny relative to the id space, so the retry
    /// loop terminates almost immediately in practice.
    pub fn allocate<V>(&self, live: &HashMap<SessionId, V>) -> SessionId {
        let mut rng = rand::thread_rng();
        loop {
            let candidate = rng.gen_range(ID_MIN..ID_MAX).to_string();
            if !live.contains_key(&candidate) {
                debug!(session_id = %candidate, "Allocated session id");
                return candidate;
            }
            debug!(session_id = %candidate, "Session id collision, retrying");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocated_id_is_six_digits() {
        let allocator = IdAllocator::new();
        let live: HashMap<SessionId, ()> = HashMap::new();
        let id = allocator.allocate(&live);
        assert_eq!(id.len(), 6);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_allocated_id_avoids_live_ids() {
        let allocator = IdAllocator::new();
        let mut live: HashMap<SessionId, ()> = HashMap::new();
        for _ in 0..100 {
            let id = allocator.allocate(&live);
            assert!(!live.contains_key(&id));
            live.insert(id, ());
        }
        assert_eq!(live.len(), 100);
    }
}
