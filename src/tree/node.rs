//! Tree node and height primitives.
//!
//! A [`Node`] owns one [`Record`] plus its two child subtrees. The cached
//! `height` field is what makes AVL rebalancing O(1) per level: balance
//! factors come straight from the caches instead of re-walking subtrees.
//!
//! # Invariants
//! - `height == 1 + max(height(left), height(right))`, with an absent
//!   subtree counting as height 0. A stale cache is a correctness bug.
//! - Children are exclusively owned (`Box`), no back-references.

use crate::dict::Record;

/// An owned, possibly-absent subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A single tree node: one record, two exclusively-owned subtrees, and a
/// cached height.
pub(crate) struct Node {
    pub(crate) record: Record,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) height: u32,
}

impl Node {
    /// Create a fresh leaf holding `record`.
    pub(crate) fn new(record: Record) -> Box<Node> {
        Box::new(Node {
            record,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Height of a possibly-absent subtree (0 when absent).
    #[inline]
    pub(crate) fn link_height(link: &Link) -> u32 {
        link.as_deref().map_or(0, |node| node.height)
    }

    /// Recompute the cached height from the children's caches.
    ///
    /// Must be called after any structural change to `left` or `right`.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + Self::link_height(&self.left).max(Self::link_height(&self.right));
    }

    /// Height of the left subtree minus height of the right subtree.
    ///
    /// The AVL invariant keeps this in `-1..=1` at every node between
    /// operations; insert and remove see transient values of ±2 on the
    /// way back up and rotate them away.
    #[inline]
    pub(crate) fn balance_factor(&self) -> i32 {
        Self::link_height(&self.left) as i32 - Self::link_height(&self.right) as i32
    }

    // ========================================================================
    // Rotations
    // ========================================================================
    //
    // Pure structural transforms: no key comparison, no payload access.
    // Each recomputes the heights of both nodes involved before returning
    // the new subtree root.

    /// Single right rotation.
    ///
    /// ```text
    ///         y                x
    ///        / \              / \
    ///       x   C    ==>     A   y
    ///      / \                  / \
    ///     A   B                B   C
    /// ```
    pub(crate) fn rotate_right(mut y: Box<Node>) -> Box<Node> {
        let mut x = y.left.take().expect("right rotation requires a left child");
        y.left = x.right.take();
        y.update_height();
        x.right = Some(y);
        x.update_height();
        x
    }

    /// Single left rotation (mirror of [`Node::rotate_right`]).
    pub(crate) fn rotate_left(mut x: Box<Node>) -> Box<Node> {
        let mut y = x.right.take().expect("left rotation requires a right child");
        x.right = y.left.take();
        x.update_height();
        y.left = Some(x);
        y.update_height();
        y
    }
}
