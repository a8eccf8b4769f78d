//! Types for suffix trie indexing
//!
//! Offsets are counted in characters (Unicode scalar values) of the indexed
//! text, never in bytes.

use serde::{Deserialize, Serialize};

/// Character position in the indexed text
pub type Offset = usize;

/// Index of a node in the trie's arena
pub type NodeId = usize;

/// Arena slot of the root node
pub const ROOT: NodeId = 0;

/// Sentinel appended to every inserted suffix.
/// Using NUL as it's invalid in most text and won't appear in prose or code
pub const SENTINEL: char = '\0';

/// Suggested cap on indexed text length, in characters, for callers that
/// opt into the guard. Node count grows quadratically, so 4096 chars is
/// already millions of nodes
pub const DEFAULT_MAX_TEXT_LEN: usize = 4096;

/// Configuration for suffix trie building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Reserved terminator character (default: NUL)
    pub sentinel: char,
    /// Fold ASCII letters to lowercase in both text and queries (default: false)
    pub case_insensitive: bool,
    /// Reject texts longer than this many characters (default: `None`,
    /// no limit)
    pub max_text_len: Option<usize>,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            sentinel: SENTINEL,
            case_insensitive: false,
            max_text_len: None,
        }
    }
}

impl TrieConfig {
    /// Apply the configured case folding to one character.
    ///
    /// Only ASCII is folded so that a character never expands into several
    /// and offsets stay aligned with the original text.
    #[inline]
    pub fn fold(&self, c: char) -> char {
        if self.case_insensitive {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrieConfig::default();
        assert_eq!(config.sentinel, '\0');
        assert!(!config.case_insensitive);
        assert_eq!(config.max_text_len, None);
    }

    #[test]
    fn test_fold_is_ascii_only() {
        let config = TrieConfig {
            case_insensitive: true,
            ..Default::default()
        };
        assert_eq!(config.fold('Q'), 'q');
        assert_eq!(config.fold('É'), 'É');
        assert_eq!(TrieConfig::default().fold('Q'), 'Q');
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: TrieConfig = serde_json::from_str(r#"{"case_insensitive": true}"#).unwrap();
        assert!(config.case_insensitive);
        assert_eq!(config.sentinel, SENTINEL);
        assert_eq!(config.max_text_len, None);

        let bounded: TrieConfig =
            serde_json::from_str(r#"{"max_text_len": 4096}"#).unwrap();
        assert_eq!(bounded.max_text_len, Some(DEFAULT_MAX_TEXT_LEN));
    }
}
