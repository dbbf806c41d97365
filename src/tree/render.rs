//! Diagnostic tree-shape rendering.
//!
//! Produces a sideways view of the tree for visual inspection: the right
//! subtree on top, one node per line, four spaces of indent per level,
//! headwords truncated to [`RENDER_PREFIX_LEN`] characters. Rotate the
//! output 90° clockwise in your head and you are looking at the tree.
//!
//! Purely a debug aid; nothing load-bearing reads this output.

use crate::common::config::RENDER_PREFIX_LEN;

use super::node::{Link, Node};

/// Render the tree shape as text.
pub(crate) fn render(root: &Link) -> String {
    let mut out = String::new();
    if root.is_none() {
        out.push_str("(empty)\n");
        return out;
    }
    render_node(root.as_deref(), 0, &mut out);
    out
}

fn render_node(link: Option<&Node>, depth: usize, out: &mut String) {
    let Some(node) = link else {
        return;
    };
    render_node(node.right.as_deref(), depth + 1, out);

    for _ in 0..depth {
        out.push_str("    ");
    }
    out.extend(node.record.headword().chars().take(RENDER_PREFIX_LEN));
    out.push('\n');

    render_node(node.left.as_deref(), depth + 1, out);
}

#[cfg(test)]
mod tests {
    use super::super::ops::insert;
    use super::*;
    use crate::dict::Record;

    fn build(words: &[&str]) -> Link {
        let mut root: Link = None;
        for word in words {
            let record = Record::new(*word, "meaning", "noun", ["", "", ""]);
            let (node, _) = insert(root.take(), record, word);
            root = Some(node);
        }
        root
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&None), "(empty)\n");
    }

    #[test]
    fn test_render_single_node_truncates() {
        let root = build(&["perro"]);
        assert_eq!(render(&root), "per\n");
    }

    #[test]
    fn test_render_short_word_kept_whole() {
        let root = build(&["ya"]);
        assert_eq!(render(&root), "ya\n");
    }

    #[test]
    fn test_render_three_nodes() {
        // Root "gato", children "ala" and "perro"; right subtree prints first.
        let root = build(&["gato", "ala", "perro"]);
        assert_eq!(render(&root), "    per\ngat\n    ala\n");
    }
}
