//! Common types and utilities shared across lexitree.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Case-insensitive key comparison

pub mod config;
pub mod error;
pub mod key;

pub use error::{Error, Result};
