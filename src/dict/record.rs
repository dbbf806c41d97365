//! The dictionary record payload.

use crate::common::config::SYNONYM_SLOTS;

/// One dictionary entry: a headword plus its describing fields.
///
/// The headword is the tree key and is immutable once the record is
/// constructed - payload updates (meaning, category, synonyms) never
/// change ordering and never trigger rebalancing. Stored case is
/// preserved; only comparisons fold ASCII case.
///
/// The category is a free-form label ("noun", "verb", ...); no fixed set
/// is enforced. Synonyms are exactly [`SYNONYM_SLOTS`] strings, empty
/// slots allowed.
///
/// # Example
/// ```
/// use lexitree::Record;
///
/// let record = Record::new("ala", "wing", "noun", ["flanco", "costado", ""]);
/// assert_eq!(record.headword(), "ala");
/// assert_eq!(record.synonyms()[0], "flanco");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    headword: String,
    meaning: String,
    category: String,
    synonyms: [String; SYNONYM_SLOTS],
}

impl Record {
    /// Create a new record.
    pub fn new<H, M, C, S>(headword: H, meaning: M, category: C, synonyms: [S; SYNONYM_SLOTS]) -> Self
    where
        H: Into<String>,
        M: Into<String>,
        C: Into<String>,
        S: Into<String>,
    {
        Record {
            headword: headword.into(),
            meaning: meaning.into(),
            category: category.into(),
            synonyms: synonyms.map(Into::into),
        }
    }

    /// The headword (tree key). Immutable for the record's lifetime.
    #[inline]
    pub fn headword(&self) -> &str {
        &self.headword
    }

    /// The meaning text.
    #[inline]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    /// The grammatical category label, as stored.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The synonym slots, as stored.
    #[inline]
    pub fn synonyms(&self) -> &[String; SYNONYM_SLOTS] {
        &self.synonyms
    }

    /// Replace the meaning.
    pub fn set_meaning(&mut self, meaning: impl Into<String>) {
        self.meaning = meaning.into();
    }

    /// Replace the category label.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Replace all synonym slots.
    pub fn set_synonyms<S: Into<String>>(&mut self, synonyms: [S; SYNONYM_SLOTS]) {
        self.synonyms = synonyms.map(Into::into);
    }
}
