//! Trie statistics

use super::tree::SuffixTrie;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of a built trie, stored by value so it can be serialized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Length of the indexed text, in characters
    pub text_len: usize,
    /// Total nodes, root included
    pub node_count: usize,
    /// Deepest node's depth
    pub max_depth: usize,
    /// Nodes terminating a suffix (sentinel edges)
    pub terminal_count: usize,
    /// Distinct offsets recorded across all nodes
    pub position_count: usize,
    /// Insertion events across all nodes, duplicates included
    pub visit_count: usize,
    /// Node count per depth, root first
    pub level_sizes: Vec<usize>,
    /// Whether the trie was built case-insensitive
    pub case_insensitive: bool,
}

impl SuffixTrie {
    /// Collect statistics over every node
    pub fn stats(&self) -> TrieStats {
        let sentinel = self.config().sentinel;
        let nodes = self.nodes();

        TrieStats {
            text_len: self.text_len(),
            node_count: nodes.len(),
            max_depth: nodes.iter().map(|n| n.depth()).max().unwrap_or(0),
            terminal_count: nodes
                .iter()
                .filter(|n| n.label() == Some(sentinel))
                .count(),
            position_count: nodes.iter().map(|n| n.positions().count()).sum(),
            visit_count: nodes.iter().map(|n| n.visits()).sum(),
            level_sizes: self.level_sizes(),
            case_insensitive: self.config().case_insensitive,
        }
    }
}

impl fmt::Display for TrieStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trie Statistics")?;
        writeln!(f, "===============")?;
        writeln!(f, "Text length:      {}", self.text_len)?;
        writeln!(f, "Node count:       {}", self.node_count)?;
        writeln!(f, "Max depth:        {}", self.max_depth)?;
        writeln!(f, "Suffixes:         {}", self.terminal_count)?;
        writeln!(f, "Positions:        {}", self.position_count)?;
        writeln!(f, "Visits:           {}", self.visit_count)?;
        writeln!(f, "Case-insensitive: {}", self.case_insensitive)?;

        writeln!(f)?;
        writeln!(f, "Nodes by depth:")?;
        for (depth, size) in self.level_sizes.iter().enumerate().take(15) {
            writeln!(f, "  {:<5} {}", depth, size)?;
        }
        if self.level_sizes.len() > 15 {
            writeln!(f, "  ... and {} more", self.level_sizes.len() - 15)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_foo() {
        let stats = SuffixTrie::construct("foo").unwrap().stats();
        assert_eq!(stats.text_len, 3);
        assert_eq!(stats.node_count, 10);
        assert_eq!(stats.max_depth, 4);
        // One terminator per suffix, the empty one included
        assert_eq!(stats.terminal_count, 4);
        assert_eq!(stats.level_sizes, vec![1, 3, 3, 2, 1]);
        assert!(!stats.case_insensitive);
    }

    #[test]
    fn test_stats_visits_grow_on_reinsert() {
        let mut trie = SuffixTrie::construct("foo").unwrap();
        let before = trie.stats();
        trie.insert_text("foo").unwrap();
        let after = trie.stats();

        assert_eq!(after.node_count, before.node_count);
        assert_eq!(after.position_count, before.position_count);
        assert!(after.visit_count > before.visit_count);
    }

    #[test]
    fn test_stats_json() {
        let stats = SuffixTrie::construct("ab").unwrap().stats();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["node_count"], 7);
        assert_eq!(json["level_sizes"], serde_json::json!([1, 3, 2, 1]));
    }
}
