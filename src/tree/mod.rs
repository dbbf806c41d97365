//! The AVL tree engine.
//!
//! A self-balancing binary search tree over dictionary records, ordered by
//! ASCII case-insensitive headword comparison. The balance invariant
//! (`|height(left) - height(right)| <= 1` at every node) keeps all
//! operations O(log n).
//!
//! # Components
//! - `node` - Node structure, cached heights, rotations
//! - `ops` - Insert, remove, search, count, boundary walks
//! - [`InOrder`] - Lazy, restartable ascending-order traversal
//! - `render` - Sideways textual shape dump (debug aid)
//!
//! The engine is internal; callers go through
//! [`Dictionary`](crate::dict::Dictionary), which owns the root link and
//! stores the new root returned by every mutating operation.

mod iter;
mod node;
mod ops;
mod render;

pub use iter::InOrder;

pub(crate) use node::Link;
pub(crate) use ops::{
    count, find, find_mut, height, insert, is_balanced, leftmost, remove, rightmost,
};
pub(crate) use render::render;
