//! Dictionary operation statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Operation counters tracked by a [`Dictionary`](super::Dictionary).
///
/// All fields are atomic so read-side operations can bump counters through
/// a shared reference, and so a [`SharedDictionary`](super::SharedDictionary)
/// can expose them without extra locking.
///
/// # Memory Ordering
/// `Ordering::Relaxed` everywhere: the counters only need atomicity, not
/// synchronization with each other.
#[derive(Debug)]
pub struct DictionaryStats {
    /// Records successfully added.
    pub insertions: AtomicU64,

    /// Inserts rejected because the headword already existed.
    pub duplicates_rejected: AtomicU64,

    /// Records removed.
    pub removals: AtomicU64,

    /// Remove calls that found no matching headword.
    pub removals_missed: AtomicU64,

    /// Lookup calls.
    pub lookups: AtomicU64,

    /// Lookup calls that found no matching headword.
    pub lookup_misses: AtomicU64,
}

impl DictionaryStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            insertions: AtomicU64::new(0),
            duplicates_rejected: AtomicU64::new(0),
            removals: AtomicU64::new(0),
            removals_missed: AtomicU64::new(0),
            lookups: AtomicU64::new(0),
            lookup_misses: AtomicU64::new(0),
        }
    }

    /// Fraction of lookups that found a record (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let misses = self.lookup_misses.load(Ordering::Relaxed);

        if lookups == 0 {
            0.0
        } else {
            (lookups - misses) as f64 / lookups as f64
        }
    }

    /// Get a non-atomic snapshot for display or comparison.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            insertions: self.insertions.load(Ordering::Relaxed),
            duplicates_rejected: self.duplicates_rejected.load(Ordering::Relaxed),
            removals: self.removals.load(Ordering::Relaxed),
            removals_missed: self.removals_missed.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.insertions.store(0, Ordering::Relaxed);
        self.duplicates_rejected.store(0, Ordering::Relaxed);
        self.removals.store(0, Ordering::Relaxed);
        self.removals_missed.store(0, Ordering::Relaxed);
        self.lookups.store(0, Ordering::Relaxed);
        self.lookup_misses.store(0, Ordering::Relaxed);
    }
}

impl Default for DictionaryStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of dictionary statistics.
///
/// Unlike [`DictionaryStats`], this is a plain value that can be printed,
/// compared, and copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub insertions: u64,
    pub duplicates_rejected: u64,
    pub removals: u64,
    pub removals_missed: u64,
    pub lookups: u64,
    pub lookup_misses: u64,
}

impl StatsSnapshot {
    /// Fraction of lookups that found a record (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            (self.lookups - self.lookup_misses) as f64 / self.lookups as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, dup_rejects: {}, removals: {}, lookups: {}, hit_rate: {:.2}% }}",
            self.insertions,
            self.duplicates_rejected,
            self.removals,
            self.lookups,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = DictionaryStats::new();
        assert_eq!(stats.insertions.load(Ordering::Relaxed), 0);
        assert_eq!(stats.lookups.load(Ordering::Relaxed), 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = DictionaryStats::new();
        stats.lookups.fetch_add(10, Ordering::Relaxed);
        stats.lookup_misses.fetch_add(3, Ordering::Relaxed);

        assert_eq!(stats.hit_rate(), 0.7);
    }

    #[test]
    fn test_snapshot() {
        let stats = DictionaryStats::new();
        stats.insertions.fetch_add(4, Ordering::Relaxed);
        stats.duplicates_rejected.fetch_add(1, Ordering::Relaxed);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.insertions, 4);
        assert_eq!(snapshot.duplicates_rejected, 1);
    }

    #[test]
    fn test_reset() {
        let stats = DictionaryStats::new();
        stats.insertions.fetch_add(100, Ordering::Relaxed);

        stats.reset();

        assert_eq!(stats.insertions.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_snapshot_display() {
        let stats = DictionaryStats::new();
        stats.insertions.fetch_add(4, Ordering::Relaxed);
        stats.lookups.fetch_add(8, Ordering::Relaxed);
        stats.lookup_misses.fetch_add(2, Ordering::Relaxed);

        let display = format!("{}", stats.snapshot());
        assert!(display.contains("inserts: 4"));
        assert!(display.contains("lookups: 8"));
        assert!(display.contains("75.00%"));
    }
}
