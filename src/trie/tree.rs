//! Suffix trie construction and search
//!
//! Every suffix of the text is inserted character by character into one
//! shared trie, each edge labelled with its absolute offset in the text.
//! A query then walks from the root; the offsets stored at the node it
//! reaches are the positions of the query's last character.
//!
//! Construction is O(n²) in both time and nodes. There are no suffix links
//! and no path compression.

use super::builder::SuffixTrieBuilder;
use super::node::Node;
use super::types::{NodeId, Offset, TrieConfig, ROOT};
use crate::error::{Result, TrieError};

/// In-memory suffix trie over a single text
#[derive(Debug, Clone)]
pub struct SuffixTrie {
    /// Node arena; the root is always at [`ROOT`]
    nodes: Vec<Node>,
    config: TrieConfig,
    /// Furthest sentinel offset recorded by any insertion
    text_len: usize,
}

impl SuffixTrie {
    /// Create a trie holding only the root
    pub fn new(config: TrieConfig) -> Self {
        Self {
            nodes: vec![Node::root()],
            config,
            text_len: 0,
        }
    }

    /// Build a trie over `text` with the default configuration
    pub fn construct(text: &str) -> Result<Self> {
        SuffixTrieBuilder::with_defaults().build(text)
    }

    /// Descend from `parent` over `label`, creating the child if needed.
    ///
    /// An existing child only gains `offset` in its occurrence set.
    pub(crate) fn add_child(&mut self, parent: NodeId, label: char, offset: Offset) -> NodeId {
        if let Some(existing) = self.nodes[parent].child(label) {
            self.nodes[existing].record(offset);
            return existing;
        }

        let id = self.nodes.len();
        let child = Node::child_of(&self.nodes[parent], id, label, offset);
        self.nodes.push(child);
        self.nodes[parent].link_child(label, id);
        id
    }

    /// Insert one word followed by the sentinel.
    ///
    /// Character `j` of `word` is recorded at offset `shift + j`.
    /// Returns the sentinel node that terminates the word.
    pub fn insert(&mut self, word: &str, shift: Offset) -> Result<NodeId> {
        let chars = self.prepare(word, shift)?;
        Ok(self.insert_chars(&chars, shift))
    }

    /// Insert every suffix of `text`, the empty one included
    pub fn insert_text(&mut self, text: &str) -> Result<()> {
        self.insert_text_with(text, |_| {})
    }

    /// Like [`insert_text`](Self::insert_text), calling `on_suffix` with the
    /// start offset of each suffix once it is inserted
    pub fn insert_text_with<F>(&mut self, text: &str, mut on_suffix: F) -> Result<()>
    where
        F: FnMut(Offset),
    {
        let chars = self.prepare(text, 0)?;
        let before = self.nodes.len();

        for start in 0..=chars.len() {
            let terminal = self.insert_chars(&chars[start..], start);
            tracing::trace!(start, terminal, "inserted suffix");
            on_suffix(start);
        }

        tracing::debug!(
            text_len = chars.len(),
            nodes_added = self.nodes.len() - before,
            nodes = self.nodes.len(),
            "indexed text"
        );
        Ok(())
    }

    fn insert_chars(&mut self, chars: &[char], shift: Offset) -> NodeId {
        self.text_len = self.text_len.max(shift + chars.len());
        let mut cur = ROOT;
        for (j, &c) in chars.iter().enumerate() {
            cur = self.add_child(cur, c, shift + j);
        }
        self.add_child(cur, self.config.sentinel, shift + chars.len())
    }

    /// Validate input text and apply case folding.
    ///
    /// The sentinel is checked against the text as given; a character that
    /// only becomes the sentinel after folding is rejected separately.
    fn prepare(&self, text: &str, shift: Offset) -> Result<Vec<char>> {
        let sentinel = self.config.sentinel;
        let mut chars = Vec::with_capacity(text.len());

        for (pos, c) in text.chars().enumerate() {
            if c == sentinel {
                return Err(TrieError::ReservedCharacter {
                    character: c,
                    offset: shift + pos,
                });
            }
            let folded = self.config.fold(c);
            if folded == sentinel {
                return Err(TrieError::FoldsToSentinel {
                    character: c,
                    sentinel,
                    offset: shift + pos,
                });
            }
            chars.push(folded);
        }

        if let Some(max) = self.config.max_text_len {
            if chars.len() > max {
                return Err(TrieError::TextTooLong {
                    len: chars.len(),
                    max,
                });
            }
        }

        Ok(chars)
    }

    /// Find the node spelled by `query`.
    ///
    /// Returns `None` for the empty query, for queries containing the
    /// sentinel, and when some character has no matching edge.
    pub fn locate(&self, query: &str) -> Option<NodeId> {
        if query.is_empty() {
            return None;
        }

        let mut cur = ROOT;
        for c in query.chars() {
            let c = self.config.fold(c);
            if c == self.config.sentinel {
                return None;
            }
            cur = self.nodes[cur].child(c)?;
        }
        Some(cur)
    }

    /// Find every offset where `query` starts, in ascending order.
    ///
    /// `None` means not found; see [`locate`](Self::locate).
    pub fn search(&self, query: &str) -> Option<Vec<Offset>> {
        let node = &self.nodes[self.locate(query)?];

        // Stored offsets belong to the query's last character, which sits
        // depth - 1 characters after the query start
        let shift = node.depth() - 1;
        let mut offsets: Vec<Offset> = node.positions().map(|pos| pos - shift).collect();
        offsets.sort_unstable();
        Some(offsets)
    }

    /// Whether `query` occurs anywhere in the text
    pub fn contains(&self, query: &str) -> bool {
        self.locate(query).is_some()
    }

    /// Number of distinct positions where `query` occurs
    pub fn count(&self, query: &str) -> usize {
        self.locate(query)
            .map_or(0, |id| self.nodes[id].positions().count())
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All nodes in arena (creation) order
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes, root included
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Length in characters of the indexed text: the furthest sentinel
    /// offset recorded so far. `insert(word, shift)` extends it to
    /// `shift + word length` when that reaches further
    #[inline]
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Walk parent links from `id` up to and including the root
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            trie: self,
            next: self.nodes.get(id).and_then(Node::parent),
        }
    }
}

/// Iterator over the proper ancestors of a node, nearest first
pub struct Ancestors<'a> {
    trie: &'a SuffixTrie,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.trie.nodes[self.next?];
        self.next = node.parent();
        Some(node)
    }
}
