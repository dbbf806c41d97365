//! Error types for lexitree.

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the dictionary store.
///
/// Every variant is recoverable: no operation leaves the tree in a state
/// that violates its ordering or balance invariants. Filters that match
/// nothing yield empty iterators rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Insert attempted with a headword already present.
    ///
    /// Headword uniqueness is case-insensitive, so inserting "Ala" when
    /// "ala" exists is a duplicate. The tree is left untouched and the
    /// existing record keeps its payload.
    #[error("word \"{0}\" is already in the dictionary")]
    DuplicateWord(String),

    /// Update targeted a headword that is not in the tree.
    #[error("word \"{0}\" is not in the dictionary")]
    WordNotFound(String),
}
