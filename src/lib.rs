//! lexitree - An in-memory dictionary store backed by a self-balancing AVL tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Presentation (out of crate)                    │
//! │        menus, field collection, record rendering, I/O           │
//! └──────────────────────────────┬──────────────────────────────────┘
//!                                ↓
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           lexitree                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Facade Layer (dict/)                        │   │
//! │  │   Dictionary + Record + DictionaryStats                  │   │
//! │  │   SharedDictionary (coarse Mutex for multi-caller use)   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              AVL Engine (tree/)                          │   │
//! │  │   Node + rotations │ insert/remove/find │ InOrder iter   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Primitives (common/)                        │   │
//! │  │   case-insensitive key ordering │ Error │ constants      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (key comparison, Error, config)
//! - [`tree`] - The AVL tree engine (nodes, rotations, traversal)
//! - [`dict`] - The public facade (Dictionary, Record, stats, lock wrapper)
//!
//! # Quick Start
//! ```
//! use lexitree::{Dictionary, Record};
//!
//! let mut dict = Dictionary::new();
//! dict.insert(Record::new(
//!     "perro",
//!     "domestic canine",
//!     "noun",
//!     ["can", "chucho", ""],
//! ))
//! .unwrap();
//!
//! // Lookup is case-insensitive; stored case is preserved.
//! let record = dict.get("PERRO").unwrap();
//! assert_eq!(record.headword(), "perro");
//! assert_eq!(dict.len(), 1);
//! ```

// Core modules
pub mod common;
pub mod dict;
pub mod tree;

// Re-export commonly used items at crate root for convenience
pub use common::config::SYNONYM_SLOTS;
pub use common::{Error, Result};

pub use dict::{Dictionary, DictionaryStats, Record, SharedDictionary, StatsSnapshot};
pub use tree::InOrder;
