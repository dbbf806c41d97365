//! Coarse-grained lock wrapper for multi-caller use.
//!
//! The tree is not safe to mutate concurrently: a rotation rewrites
//! several nodes' links and heights in a sequence that must not
//! interleave. The supported concurrency model is therefore one exclusive
//! lock per logical dictionary, taken for the whole duration of each
//! operation.

use parking_lot::{Mutex, MutexGuard};

use super::dictionary::Dictionary;

/// A [`Dictionary`] behind a single operation-level mutex.
///
/// Callers lock, perform one or more operations, and drop the guard.
/// Holding the guard across a read-then-write pair also makes the pair
/// atomic with respect to other callers.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use lexitree::{Record, SharedDictionary};
///
/// let dict = Arc::new(SharedDictionary::new());
///
/// let handle = Arc::clone(&dict);
/// std::thread::spawn(move || {
///     let mut guard = handle.lock();
///     guard.insert(Record::new("gato", "cat", "noun", ["", "", ""])).unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(dict.lock().len(), 1);
/// ```
pub struct SharedDictionary {
    inner: Mutex<Dictionary>,
}

impl SharedDictionary {
    /// Create an empty shared dictionary.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Dictionary::new()),
        }
    }

    /// Wrap an existing dictionary.
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self {
            inner: Mutex::new(dictionary),
        }
    }

    /// Acquire the exclusive lock.
    pub fn lock(&self) -> MutexGuard<'_, Dictionary> {
        self.inner.lock()
    }

    /// Consume the wrapper and take the dictionary back out.
    pub fn into_inner(self) -> Dictionary {
        self.inner.into_inner()
    }
}

impl Default for SharedDictionary {
    fn default() -> Self {
        Self::new()
    }
}
