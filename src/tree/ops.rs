//! AVL insert, remove, and query operations.
//!
//! Every mutating function here takes its subtree by value and returns the
//! post-operation subtree root; the caller overwrites its stored link with
//! the result. Rotations and root-level removal therefore never need
//! aliasing tricks - changing which node is root is just an ownership move.
//!
//! Rebalancing case selection differs between the two mutations:
//! - insert compares the inserted headword against the immediate child's
//!   headword (the new key is still present down that path);
//! - remove examines the child subtree's balance factor (the removed key
//!   is gone, so there is nothing to compare against).

use std::cmp::Ordering;

use crate::common::key;
use crate::dict::Record;

use super::node::{Link, Node};

// ============================================================================
// Insert
// ============================================================================

/// Insert `record` into the subtree, returning the new subtree root.
///
/// `word` is the record's headword, threaded separately so the rebalancing
/// cases can compare against it after the record has moved into the tree.
///
/// On a case-insensitive key collision the subtree is returned unchanged
/// (heights untouched, no rotation) and the rejected record is handed back
/// so the caller can report the duplicate.
pub(crate) fn insert(link: Link, record: Record, word: &str) -> (Box<Node>, Option<Record>) {
    let Some(mut node) = link else {
        // Insertion into an empty subtree: fresh leaf of height 1.
        return (Node::new(record), None);
    };

    let rejected = match key::compare(word, node.record.headword()) {
        Ordering::Equal => return (node, Some(record)),
        Ordering::Less => {
            let (child, rejected) = insert(node.left.take(), record, word);
            node.left = Some(child);
            rejected
        }
        Ordering::Greater => {
            let (child, rejected) = insert(node.right.take(), record, word);
            node.right = Some(child);
            rejected
        }
    };

    if rejected.is_some() {
        // Nothing was added below; this level's shape and height are intact.
        return (node, rejected);
    }

    node.update_height();
    (rebalance_after_insert(node, word), None)
}

/// Apply the four AVL insertion cases at `node` if it became unbalanced.
///
/// Case selection compares the inserted headword against the heavy child's
/// headword: LL and RR take a single rotation, LR and RL rotate the child
/// first.
fn rebalance_after_insert(mut node: Box<Node>, word: &str) -> Box<Node> {
    let bf = node.balance_factor();

    if bf > 1 {
        let went_left_of_child = node
            .left
            .as_deref()
            .is_some_and(|l| key::compare(word, l.record.headword()) == Ordering::Less);
        if !went_left_of_child {
            // Left-right: rotate the left child into the left-left shape.
            let left = node.left.take().expect("left-heavy node has a left child");
            node.left = Some(Node::rotate_left(left));
        }
        return Node::rotate_right(node);
    }

    if bf < -1 {
        let went_right_of_child = node
            .right
            .as_deref()
            .is_some_and(|r| key::compare(word, r.record.headword()) == Ordering::Greater);
        if !went_right_of_child {
            // Right-left: rotate the right child into the right-right shape.
            let right = node.right.take().expect("right-heavy node has a right child");
            node.right = Some(Node::rotate_right(right));
        }
        return Node::rotate_left(node);
    }

    node
}

// ============================================================================
// Remove
// ============================================================================

/// Remove `word` from the subtree, returning the new subtree root and
/// whether a node was actually removed.
///
/// Absent key: the subtree comes back unchanged and the flag is `false`.
///
/// A node with two children is not spliced directly: its payload is
/// overwritten with the in-order successor's payload (the minimum of the
/// right subtree) and the successor's original key is then removed from
/// the right subtree. The physically removed node always has at most one
/// child.
pub(crate) fn remove(link: Link, word: &str) -> (Link, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };

    let removed = match key::compare(word, node.record.headword()) {
        Ordering::Less => {
            let (child, removed) = remove(node.left.take(), word);
            node.left = child;
            removed
        }
        Ordering::Greater => {
            let (child, removed) = remove(node.right.take(), word);
            node.right = child;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // Zero or one child: splice in the sole child (or nothing).
            // The node is dropped here; the parent level rebalances.
            (None, child) | (child, None) => return (child, true),
            (left, Some(right)) => {
                node.left = left;
                node.record = min_record(&right).clone();
                let (child, _) = remove(Some(right), node.record.headword());
                node.right = child;
                true
            }
        },
    };

    if !removed {
        return (Some(node), false);
    }

    node.update_height();
    (Some(rebalance_after_remove(node)), true)
}

/// Apply the four AVL deletion cases at `node` if it became unbalanced.
///
/// Unlike insertion, case selection reads the heavy child's balance
/// factor: a non-negative left child means left-left, a negative one means
/// left-right (mirrored on the right side).
fn rebalance_after_remove(mut node: Box<Node>) -> Box<Node> {
    let bf = node.balance_factor();

    if bf > 1 {
        let left_bf = node.left.as_deref().map_or(0, Node::balance_factor);
        if left_bf < 0 {
            let left = node.left.take().expect("left-heavy node has a left child");
            node.left = Some(Node::rotate_left(left));
        }
        return Node::rotate_right(node);
    }

    if bf < -1 {
        let right_bf = node.right.as_deref().map_or(0, Node::balance_factor);
        if right_bf > 0 {
            let right = node.right.take().expect("right-heavy node has a right child");
            node.right = Some(Node::rotate_right(right));
        }
        return Node::rotate_left(node);
    }

    node
}

/// The minimum-keyed record of a subtree (its leftmost descendant).
fn min_record(node: &Node) -> &Record {
    let mut current = node;
    while let Some(next) = current.left.as_deref() {
        current = next;
    }
    &current.record
}

// ============================================================================
// Read-only queries
// ============================================================================

/// Locate `word` by case-insensitive descent. No rebalancing on search.
pub(crate) fn find<'a>(link: &'a Link, word: &str) -> Option<&'a Node> {
    let node = link.as_deref()?;
    match key::compare(word, node.record.headword()) {
        Ordering::Equal => Some(node),
        Ordering::Less => find(&node.left, word),
        Ordering::Greater => find(&node.right, word),
    }
}

/// Mutable variant of [`find`], used by the payload update operations.
pub(crate) fn find_mut<'a>(link: &'a mut Link, word: &str) -> Option<&'a mut Node> {
    let node = link.as_deref_mut()?;
    match key::compare(word, node.record.headword()) {
        Ordering::Equal => Some(node),
        Ordering::Less => find_mut(&mut node.left, word),
        Ordering::Greater => find_mut(&mut node.right, word),
    }
}

/// Total node count: `1 + count(left) + count(right)`, 0 for absent.
pub(crate) fn count(link: &Link) -> usize {
    link.as_deref()
        .map_or(0, |node| 1 + count(&node.left) + count(&node.right))
}

/// Subtree height as cached at the root link.
pub(crate) fn height(link: &Link) -> u32 {
    Node::link_height(link)
}

/// The record with the case-insensitively smallest headword, if any.
pub(crate) fn leftmost(link: &Link) -> Option<&Record> {
    link.as_deref().map(min_record)
}

/// The record with the case-insensitively largest headword, if any.
pub(crate) fn rightmost(link: &Link) -> Option<&Record> {
    let mut current = link.as_deref()?;
    while let Some(next) = current.right.as_deref() {
        current = next;
    }
    Some(&current.record)
}

/// Verify the AVL balance invariant and height-cache exactness everywhere.
///
/// Diagnostic only; O(n).
pub(crate) fn is_balanced(link: &Link) -> bool {
    match link.as_deref() {
        None => true,
        Some(node) => {
            let expected = 1 + Node::link_height(&node.left).max(Node::link_height(&node.right));
            node.height == expected
                && node.balance_factor().abs() <= 1
                && is_balanced(&node.left)
                && is_balanced(&node.right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(word: &str) -> Record {
        Record::new(word, "meaning", "noun", ["", "", ""])
    }

    fn build(words: &[&str]) -> Link {
        let mut root: Link = None;
        for word in words {
            let (node, rejected) = insert(root.take(), rec(word), word);
            assert!(rejected.is_none(), "unexpected duplicate {word}");
            root = Some(node);
        }
        root
    }

    fn inorder_words(link: &Link) -> Vec<String> {
        let mut out = Vec::new();
        fn walk(link: &Link, out: &mut Vec<String>) {
            if let Some(node) = link.as_deref() {
                walk(&node.left, out);
                out.push(node.record.headword().to_ascii_lowercase());
                walk(&node.right, out);
            }
        }
        walk(link, &mut out);
        out
    }

    /// Order + balance + height caches, the §3-style full check.
    fn assert_well_formed(link: &Link) {
        assert!(is_balanced(link), "balance invariant violated");
        let words = inorder_words(link);
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted, "BST ordering invariant violated");
    }

    #[test]
    fn test_insert_into_empty() {
        let root = build(&["gato"]);
        assert_eq!(height(&root), 1);
        assert_eq!(count(&root), 1);
    }

    #[test]
    fn test_insert_left_left_rotation() {
        // Descending inserts force a right rotation at "c".
        let root = build(&["c", "b", "a"]);
        assert_eq!(height(&root), 2);
        assert_eq!(root.as_deref().unwrap().record.headword(), "b");
        assert_well_formed(&root);
    }

    #[test]
    fn test_insert_right_right_rotation() {
        let root = build(&["a", "b", "c"]);
        assert_eq!(height(&root), 2);
        assert_eq!(root.as_deref().unwrap().record.headword(), "b");
        assert_well_formed(&root);
    }

    #[test]
    fn test_insert_left_right_rotation() {
        let root = build(&["c", "a", "b"]);
        assert_eq!(height(&root), 2);
        assert_eq!(root.as_deref().unwrap().record.headword(), "b");
        assert_well_formed(&root);
    }

    #[test]
    fn test_insert_right_left_rotation() {
        let root = build(&["a", "c", "b"]);
        assert_eq!(height(&root), 2);
        assert_eq!(root.as_deref().unwrap().record.headword(), "b");
        assert_well_formed(&root);
    }

    #[test]
    fn test_insert_duplicate_hands_record_back() {
        let root = build(&["gato"]);
        let (root, rejected) = insert(root, rec("GATO"), "GATO");
        assert_eq!(rejected.unwrap().headword(), "GATO");
        // Original payload and shape untouched.
        assert_eq!(root.record.headword(), "gato");
        assert_eq!(root.height, 1);
    }

    #[test]
    fn test_ascending_chain_stays_logarithmic() {
        let words: Vec<String> = (b'a'..=b'p').map(|c| (c as char).to_string()).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let root = build(&refs);
        assert_eq!(count(&root), 16);
        // A degenerate chain would be height 16; AVL caps it at 5.
        assert!(height(&root) <= 5);
        assert_well_formed(&root);
    }

    #[test]
    fn test_remove_leaf() {
        let root = build(&["b", "a", "c"]);
        let (root, removed) = remove(root, "a");
        assert!(removed);
        assert_eq!(count(&root), 2);
        assert!(find(&root, "a").is_none());
        assert_well_formed(&root);
    }

    #[test]
    fn test_remove_single_child_splice() {
        let root = build(&["b", "a", "d", "c"]);
        let (root, removed) = remove(root, "d");
        assert!(removed);
        assert!(find(&root, "c").is_some());
        assert_eq!(count(&root), 3);
        assert_well_formed(&root);
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let root = build(&["b", "a", "d", "c", "e"]);
        let (root, removed) = remove(root, "b");
        assert!(removed);
        assert!(find(&root, "b").is_none());
        // Successor "c" took b's place; everything else survives.
        assert_eq!(inorder_words(&root), ["a", "c", "d", "e"]);
        assert_well_formed(&root);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let root = build(&["b", "a", "c"]);
        let h = height(&root);
        let (root, removed) = remove(root, "zzz");
        assert!(!removed);
        assert_eq!(count(&root), 3);
        assert_eq!(height(&root), h);
    }

    #[test]
    fn test_remove_from_empty() {
        let (root, removed) = remove(None, "gato");
        assert!(root.is_none());
        assert!(!removed);
    }

    #[test]
    fn test_remove_rebalances() {
        // Deleting down one flank must keep the other flank in check.
        let words: Vec<String> = (b'a'..=b'h').map(|c| (c as char).to_string()).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut root = build(&refs);
        for word in ["a", "b", "c"] {
            let (next, removed) = remove(root.take(), word);
            assert!(removed);
            root = next;
            assert_well_formed(&root);
        }
        assert_eq!(count(&root), 5);
    }

    #[test]
    fn test_remove_is_case_insensitive() {
        let root = build(&["Gato"]);
        let (root, removed) = remove(root, "gato");
        assert!(removed);
        assert!(root.is_none());
    }

    #[test]
    fn test_find() {
        let root = build(&["perro", "ala", "zorro"]);
        assert_eq!(find(&root, "ALA").unwrap().record.headword(), "ala");
        assert!(find(&root, "gato").is_none());
    }

    #[test]
    fn test_boundaries() {
        let root = build(&["perro", "ala", "zorro", "gato"]);
        assert_eq!(leftmost(&root).unwrap().headword(), "ala");
        assert_eq!(rightmost(&root).unwrap().headword(), "zorro");
        assert!(leftmost(&None).is_none());
        assert!(rightmost(&None).is_none());
    }

    #[test]
    fn test_count() {
        assert_eq!(count(&None), 0);
        let root = build(&["b", "a", "c"]);
        assert_eq!(count(&root), 3);
    }
}
