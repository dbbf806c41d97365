//! The dictionary facade.
//!
//! This is the layer callers interact with:
//! - [`Dictionary`] - owns the tree, exposes every store operation
//! - [`Record`] - the payload type (headword, meaning, category, synonyms)
//! - [`SharedDictionary`] - coarse mutex wrapper for multi-caller use
//! - [`DictionaryStats`] - operation counters

mod dictionary;
mod record;
mod shared;
mod stats;

pub use dictionary::Dictionary;
pub use record::Record;
pub use shared::SharedDictionary;
pub use stats::{DictionaryStats, StatsSnapshot};
