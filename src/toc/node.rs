use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One entry of the site-wide table of contents.
///
/// The tree is built once by the markdown renderer after every page has been
/// rendered and is read-only afterwards. The `n`-th top-level node belongs to
/// the `n`-th page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    /// Anchor identifier, unique across the whole site
    pub id: String,
    /// Heading markup exactly as it appears inside the rendered heading element
    pub label: String,
    /// Sub-headings nested directly under this heading
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocNode>,
}

impl TocNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TocNode>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, this node included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TocNode::node_count).sum::<usize>()
    }
}

/// Dotted section number of the `index`-th (0-based) sibling under `prefix`.
///
/// `section_number("2.", 2)` is `"2.3."`.
pub fn section_number(prefix: &str, index: usize) -> String {
    format!("{}{}.", prefix, index + 1)
}

/// Total number of nodes in a forest
pub fn count_nodes(toc: &[TocNode]) -> usize {
    toc.iter().map(TocNode::node_count).sum()
}

/// Anchors that occur more than once in the tree, in first-repeat order
pub fn duplicate_ids(toc: &[TocNode]) -> Vec<String> {
    fn walk(nodes: &[TocNode], seen: &mut HashSet<String>, dups: &mut Vec<String>) {
        for node in nodes {
            if !seen.insert(node.id.clone()) && !dups.contains(&node.id) {
                dups.push(node.id.clone());
            }
            walk(&node.children, seen, dups);
        }
    }

    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    walk(toc, &mut seen, &mut dups);
    dups
}
