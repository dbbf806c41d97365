//! Dictionary - the public facade over the AVL engine.

use std::sync::atomic::Ordering;

use crate::common::config::SYNONYM_SLOTS;
use crate::common::{Error, Result};
use crate::tree::{self, InOrder, Link};

use super::record::Record;
use super::stats::DictionaryStats;

/// An in-memory dictionary of records, ordered and deduplicated by
/// case-insensitive headword.
///
/// The dictionary owns the tree root exclusively; every mutating tree
/// operation returns the post-operation root, which is stored back here.
/// There are no external node handles: record references handed out by
/// [`get`](Dictionary::get) or iteration are plain borrows whose lifetimes
/// end before the next mutation.
///
/// # Guarantees
/// After every operation, in any order and mix:
/// - headwords are unique up to ASCII case,
/// - in-order iteration yields ascending case-insensitive order,
/// - the tree stays AVL-balanced, so insert/remove/lookup are O(log n).
///
/// # Thread Safety
/// A `Dictionary` is single-threaded by design (`&mut self` mutations).
/// For multi-caller use wrap it in a
/// [`SharedDictionary`](super::SharedDictionary), which serializes whole
/// operations behind one lock.
///
/// # Example
/// ```
/// use lexitree::{Dictionary, Record};
///
/// let mut dict = Dictionary::new();
/// dict.insert(Record::new("gato", "cat", "noun", ["minino", "", ""])).unwrap();
/// dict.insert(Record::new("ala", "wing", "noun", ["", "", ""])).unwrap();
///
/// assert_eq!(dict.len(), 2);
/// let (first, last) = dict.first_and_last().unwrap();
/// assert_eq!(first.headword(), "ala");
/// assert_eq!(last.headword(), "gato");
/// ```
pub struct Dictionary {
    /// Root of the AVL tree, absent when empty.
    root: Link,

    /// Operation counters.
    stats: DictionaryStats,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            root: None,
            stats: DictionaryStats::new(),
        }
    }

    // ========================================================================
    // Public API: Mutations
    // ========================================================================

    /// Insert a record.
    ///
    /// # Errors
    /// `Error::DuplicateWord` if a record with the same headword (ignoring
    /// ASCII case) already exists. The tree and the existing record are
    /// left untouched.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        let word = record.headword().to_owned();
        let (root, rejected) = tree::insert(self.root.take(), record, &word);
        self.root = Some(root);

        match rejected {
            Some(_) => {
                self.stats.duplicates_rejected.fetch_add(1, Ordering::Relaxed);
                Err(Error::DuplicateWord(word))
            }
            None => {
                self.stats.insertions.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
        }
    }

    /// Remove the record with the given headword.
    ///
    /// Returns `true` if a record was removed, `false` if the headword was
    /// absent (the tree is left unchanged).
    pub fn remove(&mut self, word: &str) -> bool {
        let (root, removed) = tree::remove(self.root.take(), word);
        self.root = root;

        if removed {
            self.stats.removals.fetch_add(1, Ordering::Relaxed);
        } else {
            self.stats.removals_missed.fetch_add(1, Ordering::Relaxed);
        }
        removed
    }

    /// Replace the meaning of an existing record.
    ///
    /// Payload-only mutation: shape, heights, and ordering are untouched.
    ///
    /// # Errors
    /// `Error::WordNotFound` if the headword is absent.
    pub fn update_meaning(&mut self, word: &str, meaning: impl Into<String>) -> Result<()> {
        match tree::find_mut(&mut self.root, word) {
            Some(node) => {
                node.record.set_meaning(meaning);
                Ok(())
            }
            None => Err(Error::WordNotFound(word.to_owned())),
        }
    }

    /// Replace the grammatical category of an existing record.
    ///
    /// # Errors
    /// `Error::WordNotFound` if the headword is absent.
    pub fn update_category(&mut self, word: &str, category: impl Into<String>) -> Result<()> {
        match tree::find_mut(&mut self.root, word) {
            Some(node) => {
                node.record.set_category(category);
                Ok(())
            }
            None => Err(Error::WordNotFound(word.to_owned())),
        }
    }

    /// Replace all synonym slots of an existing record.
    ///
    /// # Errors
    /// `Error::WordNotFound` if the headword is absent.
    pub fn update_synonyms<S: Into<String>>(
        &mut self,
        word: &str,
        synonyms: [S; SYNONYM_SLOTS],
    ) -> Result<()> {
        match tree::find_mut(&mut self.root, word) {
            Some(node) => {
                node.record.set_synonyms(synonyms);
                Ok(())
            }
            None => Err(Error::WordNotFound(word.to_owned())),
        }
    }

    // ========================================================================
    // Public API: Lookups and listings
    // ========================================================================

    /// Look up a record by headword (case-insensitive).
    pub fn get(&self, word: &str) -> Option<&Record> {
        self.stats.lookups.fetch_add(1, Ordering::Relaxed);
        let found = tree::find(&self.root, word).map(|node| &node.record);
        if found.is_none() {
            self.stats.lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Check whether a headword is present (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        tree::find(&self.root, word).is_some()
    }

    /// Iterate over all records in ascending case-insensitive headword
    /// order. Lazy and restartable; never mutates the tree.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(&self.root)
    }

    /// All records whose category exactly equals `category`.
    ///
    /// The match is case-sensitive against the stored label ("Noun" and
    /// "noun" are different categories). No matches yields an empty
    /// iterator, not an error.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.iter().filter(move |r| r.category() == category)
    }

    /// All records whose headword starts with `letter`.
    ///
    /// Compares the raw stored first character with no case folding, so
    /// `by_letter('g')` does not match a record stored as "Gato". This
    /// mirrors the exact-character match the rest of the system was built
    /// against, even though ordering elsewhere folds case.
    pub fn by_letter(&self, letter: char) -> impl Iterator<Item = &Record> + '_ {
        self.iter()
            .filter(move |r| r.headword().chars().next() == Some(letter))
    }

    /// The alphabetically first and last records, or `None` when empty.
    pub fn first_and_last(&self) -> Option<(&Record, &Record)> {
        Some((tree::leftmost(&self.root)?, tree::rightmost(&self.root)?))
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        tree::count(&self.root)
    }

    /// Check whether the dictionary holds no records.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    // ========================================================================
    // Public API: Diagnostics
    // ========================================================================

    /// Height of the tree (0 when empty).
    pub fn height(&self) -> u32 {
        tree::height(&self.root)
    }

    /// Verify the AVL balance invariant and height caches over the whole
    /// tree. O(n); debug aid.
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.root)
    }

    /// Render the tree shape as text: sideways, one node per line,
    /// headwords truncated to three characters. Debug aid only.
    pub fn render(&self) -> String {
        tree::render(&self.root)
    }

    /// Operation statistics.
    pub fn stats(&self) -> &DictionaryStats {
        &self.stats
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Record;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> InOrder<'a> {
        self.iter()
    }
}
