//! Lock-free ID cursor shared across parallel workers

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared cursor dispensing sequential page IDs.
///
/// Workers call [`next()`](IdCursor::next) to atomically claim the next
/// ID. Over any run the dispensed IDs form the contiguous range
/// `[start, position)`, each handed to exactly one caller. The cursor
/// enforces no upper bound — callers compare the claimed ID against
/// their configured end bound.
pub struct IdCursor {
    pos: AtomicU64,
}

impl IdCursor {
    pub fn new(start: u64) -> Self {
        Self {
            pos: AtomicU64::new(start),
        }
    }

    /// Claim the next ID (lock-free)
    pub fn next(&self) -> u64 {
        self.pos.fetch_add(1, Ordering::AcqRel)
    }

    /// Current position — the next ID that would be dispensed
    pub fn position(&self) -> u64 {
        self.pos.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn dispenses_sequentially() {
        let cursor = IdCursor::new(1000);
        assert_eq!(cursor.next(), 1000);
        assert_eq!(cursor.next(), 1001);
        assert_eq!(cursor.next(), 1002);
        assert_eq!(cursor.position(), 1003);
    }

    #[test]
    fn position_tracks_claims() {
        let cursor = IdCursor::new(0);
        assert_eq!(cursor.position(), 0);
        cursor.next();
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn concurrent_claims_are_unique_and_contiguous() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 1000;

        let cursor = IdCursor::new(500);
        let claimed = Mutex::new(Vec::new());

        std::thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    let mut local = Vec::with_capacity(PER_THREAD);
                    for _ in 0..PER_THREAD {
                        local.push(cursor.next());
                    }
                    claimed.lock().unwrap().extend(local);
                });
            }
        });

        let mut ids = claimed.into_inner().unwrap();
        ids.sort_unstable();
        let expected: Vec<u64> = (500..500 + (THREADS * PER_THREAD) as u64).collect();
        assert_eq!(ids, expected);
        assert_eq!(cursor.position(), 500 + (THREADS * PER_THREAD) as u64);
    }
}
