//! The shared quack tally.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts every quack that passes through a counting decorator.
///
/// One counter is shared by every decorator it is injected into, so its
/// total is the number of quacks across the whole product line, not per
/// duck. The counter is explicitly passed at construction rather than kept
/// as a hidden global, which keeps simulations and tests isolated from each
/// other.
///
/// The total is monotonically non-decreasing and only resets when the
/// counter itself is dropped. Increments are atomic, so the tally stays
/// exact even if a caller quacks from several threads.
///
/// # Example
///
/// ```
/// use flocksim_observe::QuackCounter;
///
/// let counter = QuackCounter::new();
/// counter.increment();
/// counter.increment();
/// assert_eq!(counter.total(), 2);
/// ```
#[derive(Debug, Default)]
pub struct QuackCounter {
    total: AtomicU64,
}

impl QuackCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter ready to share between decorators.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Record one quack. Returns the new total.
    pub fn increment(&self) -> u64 {
        let total = self.total.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!(total, "Quack counted");
        total
    }

    /// The number of quacks counted so far.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        assert_eq!(QuackCounter::new().total(), 0);
    }

    #[test]
    fn test_increment_returns_new_total() {
        let counter = QuackCounter::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.total(), 2);
    }

    #[test]
    fn test_shared_counter_sums_across_handles() {
        let counter = QuackCounter::shared();
        let other = Arc::clone(&counter);

        counter.increment();
        other.increment();
        other.increment();

        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn test_counter_is_exact_across_threads() {
        let counter = QuackCounter::shared();
        let mut handles = Vec::new();
        for _ in 0..4 {
            let counter = Arc::clone(&counter);
            handles.push(std::thread::spawn(move || {
                for _ in 0..250 {
                    counter.increment();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counter.total(), 1000);
    }
}
