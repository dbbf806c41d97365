//! ASCII case-insensitive headword comparison.
//!
//! Every ordering and uniqueness decision in the tree goes through this
//! module: descent direction on insert/remove/search, duplicate detection,
//! and the in-order listing order. Stored case is never altered - records
//! keep the headword exactly as entered, only comparisons fold case.
//!
//! Folding is ASCII-range only ('A'..='Z' vs 'a'..='z'); bytes outside
//! that range compare verbatim.

use std::cmp::Ordering;

/// Compare two headwords, ignoring ASCII case.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
/// use lexitree::common::key;
///
/// assert_eq!(key::compare("Ala", "ala"), Ordering::Equal);
/// assert_eq!(key::compare("gato", "Perro"), Ordering::Less);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    let lhs = a.bytes().map(|b| b.to_ascii_lowercase());
    let rhs = b.bytes().map(|b| b.to_ascii_lowercase());
    lhs.cmp(rhs)
}

/// Check two headwords for case-insensitive equality.
pub fn eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
