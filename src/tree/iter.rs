//! Lazy in-order traversal.
//!
//! [`InOrder`] walks left subtree, node, right subtree, which under the
//! case-insensitive BST ordering yields records in ascending headword
//! order. The iterator is read-only and restartable: it never mutates the
//! tree, and a fresh iterator over the same tree yields the same sequence.
//!
//! Traversal is separated from presentation on purpose - this module
//! produces a sequence of records and nothing else; rendering them is the
//! caller's business.

use std::iter::FusedIterator;

use crate::dict::Record;

use super::node::{Link, Node};

/// Iterator over a tree's records in ascending headword order.
///
/// Internally an explicit stack of the not-yet-visited ancestors, at most
/// one tree height deep.
///
/// # Example
/// ```
/// use lexitree::{Dictionary, Record};
///
/// let mut dict = Dictionary::new();
/// for word in ["perro", "ala", "zorro"] {
///     dict.insert(Record::new(word, "m", "noun", ["", "", ""])).unwrap();
/// }
///
/// let words: Vec<&str> = dict.iter().map(|r| r.headword()).collect();
/// assert_eq!(words, ["ala", "perro", "zorro"]);
/// ```
pub struct InOrder<'a> {
    /// Nodes whose own record and right subtree are still pending.
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: &'a Link) -> Self {
        let mut iter = InOrder { stack: Vec::new() };
        iter.descend_left(root.as_deref());
        iter
    }

    /// Push `link` and its whole left spine onto the stack.
    fn descend_left(&mut self, mut link: Option<&'a Node>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<&'a Record> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        Some(&node.record)
    }
}

impl FusedIterator for InOrder<'_> {}
