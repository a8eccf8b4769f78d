//! Trie vertices
//!
//! Nodes live in the arena owned by [`SuffixTrie`](super::SuffixTrie).
//! Links in both directions are arena indices; only the arena owns storage.

use super::types::{NodeId, Offset, ROOT};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// A single trie vertex, reached over one character edge
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    /// Edge label from the parent (`None` only for the root)
    label: Option<char>,
    /// Offsets recorded when insertion passed through this node.
    /// The root holds the single placeholder `None`
    occurrences: FxHashSet<Option<Offset>>,
    /// Number of insertion events that passed through this node,
    /// including ones whose offset was already recorded
    visits: usize,
    parent: Option<NodeId>,
    depth: usize,
    /// Children keyed by edge label, iterated in character order
    children: BTreeMap<char, NodeId>,
}

impl Node {
    pub(crate) fn root() -> Self {
        let mut occurrences = FxHashSet::default();
        occurrences.insert(None);
        Self {
            id: ROOT,
            label: None,
            occurrences,
            visits: 0,
            parent: None,
            depth: 0,
            children: BTreeMap::new(),
        }
    }

    pub(crate) fn child_of(parent: &Node, id: NodeId, label: char, offset: Offset) -> Self {
        let mut occurrences = FxHashSet::default();
        occurrences.insert(Some(offset));
        Self {
            id,
            label: Some(label),
            occurrences,
            visits: 1,
            parent: Some(parent.id),
            depth: parent.depth + 1,
            children: BTreeMap::new(),
        }
    }

    /// Record another insertion event reaching this node
    #[inline]
    pub(crate) fn record(&mut self, offset: Offset) {
        self.occurrences.insert(Some(offset));
        self.visits += 1;
    }

    #[inline]
    pub(crate) fn link_child(&mut self, label: char, child: NodeId) {
        self.children.insert(label, child);
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> Option<char> {
        self.label
    }

    /// Raw occurrence set, including the root's `None` placeholder
    #[inline]
    pub fn occurrences(&self) -> &FxHashSet<Option<Offset>> {
        &self.occurrences
    }

    /// Recorded text offsets, skipping the root placeholder (unordered)
    pub fn positions(&self) -> impl Iterator<Item = Offset> + '_ {
        self.occurrences.iter().filter_map(|pos| *pos)
    }

    #[inline]
    pub fn visits(&self) -> usize {
        self.visits
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn children(&self) -> &BTreeMap<char, NodeId> {
        &self.children
    }

    /// Arena index of the child reached over `label`, if any
    #[inline]
    pub fn child(&self, label: char) -> Option<NodeId> {
        self.children.get(&label).copied()
    }

    #[inline]
    pub fn has_child(&self, label: char) -> bool {
        self.children.contains_key(&label)
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
