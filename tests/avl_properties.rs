//! Property tests for the tree invariants.
//!
//! Random operation sequences must leave the store ordered, balanced, with
//! exact height caches and an exact count - after every single step, not
//! just at the end.

use std::collections::BTreeSet;

use proptest::prelude::*;

use lexitree::{Dictionary, Error, Record};

fn rec(word: &str) -> Record {
    Record::new(word, format!("meaning of {word}"), "noun", ["", "", ""])
}

/// Case-folded headwords in listing order.
fn folded_headwords(dict: &Dictionary) -> Vec<String> {
    dict.iter()
        .map(|r| r.headword().to_ascii_lowercase())
        .collect()
}

fn word_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-zA-Z]{1,8}", 1..64)
}

proptest! {
    #[test]
    fn insert_sequences_keep_invariants(words in word_strategy()) {
        let mut dict = Dictionary::new();
        let mut expected = BTreeSet::new();

        for word in &words {
            let folded = word.to_ascii_lowercase();
            let result = dict.insert(rec(word));

            if expected.insert(folded) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(Error::DuplicateWord(word.clone())));
            }

            prop_assert!(dict.is_balanced());
            prop_assert_eq!(dict.len(), expected.len());
        }

        // Final listing: sorted, deduplicated, complete.
        let listed = folded_headwords(&dict);
        let wanted: Vec<String> = expected.into_iter().collect();
        prop_assert_eq!(listed, wanted);
    }

    #[test]
    fn height_stays_logarithmic(words in word_strategy()) {
        let mut dict = Dictionary::new();
        for word in &words {
            let _ = dict.insert(rec(word));
        }

        let n = dict.len() as f64;
        // AVL worst case: height < 1.4405 * log2(n + 2).
        let bound = (1.4405 * (n + 2.0).log2()).ceil() as u32;
        prop_assert!(dict.height() <= bound);
    }

    #[test]
    fn remove_sequences_keep_invariants(
        words in word_strategy(),
        selector in proptest::collection::vec(any::<prop::sample::Index>(), 1..32),
    ) {
        let mut dict = Dictionary::new();
        let mut expected = BTreeSet::new();
        for word in &words {
            let _ = dict.insert(rec(word));
            expected.insert(word.to_ascii_lowercase());
        }

        for index in &selector {
            let candidates: Vec<String> = expected.iter().cloned().collect();
            if candidates.is_empty() {
                break;
            }
            let victim = index.get(&candidates).clone();

            prop_assert!(dict.remove(&victim));
            expected.remove(&victim);

            prop_assert!(dict.is_balanced());
            prop_assert_eq!(dict.len(), expected.len());
            prop_assert!(dict.get(&victim).is_none());
        }

        let listed = folded_headwords(&dict);
        let wanted: Vec<String> = expected.into_iter().collect();
        prop_assert_eq!(listed, wanted);
    }

    #[test]
    fn remove_of_absent_key_changes_nothing(words in word_strategy()) {
        let mut dict = Dictionary::new();
        for word in &words {
            let _ = dict.insert(rec(word));
        }
        let shape = dict.render();
        let count = dict.len();

        // Nine characters can never collide with 1..=8 character words.
        prop_assert!(!dict.remove("absentabs"));
        prop_assert_eq!(dict.len(), count);
        prop_assert_eq!(dict.render(), shape);
    }

    #[test]
    fn search_round_trips_every_inserted_record(words in word_strategy()) {
        let mut dict = Dictionary::new();
        let mut kept: Vec<Record> = Vec::new();

        for word in &words {
            let record = rec(word);
            if dict.insert(record.clone()).is_ok() {
                kept.push(record);
            }
        }

        for record in &kept {
            prop_assert_eq!(dict.get(record.headword()), Some(record));
        }
    }
}
