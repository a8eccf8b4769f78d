//! Breadth-first traversal and level grouping
//!
//! Children are visited in character order (the NUL sentinel sorts first),
//! so two tries built from the same text yield identical rows.

use super::node::Node;
use super::tree::SuffixTrie;
use super::types::{NodeId, ROOT};
use std::collections::VecDeque;
use std::fmt;

/// Lazy breadth-first walk over a trie, root first
pub struct BreadthFirst<'a> {
    trie: &'a SuffixTrie,
    queue: VecDeque<NodeId>,
}

impl<'a> BreadthFirst<'a> {
    pub fn new(trie: &'a SuffixTrie) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(ROOT);
        Self { trie, queue }
    }
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = &self.trie.nodes()[id];
        self.queue.extend(node.children().values().copied());
        Some(node)
    }
}

impl SuffixTrie {
    /// Breadth-first iterator over every node
    pub fn iter(&self) -> BreadthFirst<'_> {
        BreadthFirst::new(self)
    }

    /// Nodes grouped by depth: `rows[0]` is the root alone,
    /// `rows[d]` holds every depth-`d` node in breadth-first order
    pub fn rows(&self) -> Vec<Vec<&Node>> {
        let mut rows: Vec<Vec<&Node>> = Vec::new();
        for node in self.iter() {
            if node.depth() == rows.len() {
                rows.push(Vec::new());
            }
            // Breadth-first order never decreases depth
            rows[node.depth()].push(node);
        }
        rows
    }

    /// Number of nodes at each depth
    pub fn level_sizes(&self) -> Vec<usize> {
        self.rows().iter().map(Vec::len).collect()
    }
}

impl<'a> IntoIterator for &'a SuffixTrie {
    type Item = &'a Node;
    type IntoIter = BreadthFirst<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per depth; each node as `(id, label, parent)`
impl fmt::Display for SuffixTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, row) in self.rows().iter().enumerate() {
            if depth > 0 {
                writeln!(f)?;
            }
            for node in row {
                write!(f, "({}, {}, ", node.id(), LabelDisplay(node.label()))?;
                match node.parent() {
                    Some(parent) => write!(f, "{})\t", parent)?,
                    None => write!(f, "None)\t")?,
                }
            }
        }
        Ok(())
    }
}

/// Printable form of an edge label; control characters are escaped
struct LabelDisplay(Option<char>);

impl fmt::Display for LabelDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "None"),
            Some(c) if c.is_control() => write!(f, "{}", c.escape_default()),
            Some(c) => write!(f, "{}", c),
        }
    }
}
