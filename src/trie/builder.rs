//! Suffix trie builder
//!
//! Builds a suffix trie from a text by:
//! 1. Validating the text against the configuration (sentinel, size guard)
//! 2. Inserting every suffix, the empty one included, followed by the sentinel

use super::tree::SuffixTrie;
use super::types::{Offset, TrieConfig};
use crate::error::Result;

/// Builder for constructing suffix tries from text
#[derive(Debug, Clone, Default)]
pub struct SuffixTrieBuilder {
    config: TrieConfig,
}

impl SuffixTrieBuilder {
    /// Create a new suffix trie builder with the given configuration
    pub fn new(config: TrieConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(TrieConfig::default())
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Build the suffix trie for `text`
    pub fn build(&self, text: &str) -> Result<SuffixTrie> {
        self.build_with_progress(text, |_| {})
    }

    /// Build the suffix trie, calling `on_suffix` after each suffix
    /// insertion with that suffix's start offset
    pub fn build_with_progress<F>(&self, text: &str, on_suffix: F) -> Result<SuffixTrie>
    where
        F: FnMut(Offset),
    {
        let _span = tracing::debug_span!(
            "build_suffix_trie",
            case_insensitive = self.config.case_insensitive
        )
        .entered();

        let mut trie = SuffixTrie::new(self.config.clone());
        trie.insert_text_with(text, on_suffix)?;
        Ok(trie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrieError;

    #[test]
    fn test_build_simple() {
        let trie = SuffixTrieBuilder::with_defaults().build("banana").unwrap();
        assert_eq!(trie.text_len(), 6);
        assert_eq!(trie.search("ana"), Some(vec![1, 3]));
        assert_eq!(trie.search("nab"), None);
    }

    #[test]
    fn test_progress_reports_every_suffix() {
        let mut seen = Vec::new();
        SuffixTrieBuilder::with_defaults()
            .build_with_progress("abc", |start| seen.push(start))
            .unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_skip_long_text() {
        let builder = SuffixTrieBuilder::new(TrieConfig {
            max_text_len: Some(4),
            ..Default::default()
        });

        assert!(builder.build("abcd").is_ok());
        assert_eq!(
            builder.build("abcde").unwrap_err(),
            TrieError::TextTooLong { len: 5, max: 4 }
        );
    }

    #[test]
    fn test_unbounded_length() {
        let builder = SuffixTrieBuilder::new(TrieConfig {
            max_text_len: None,
            ..Default::default()
        });
        let text = "ab".repeat(2100);
        let trie = builder.build(&text).unwrap();
        assert_eq!(trie.count("ba"), 2099);
    }

    #[test]
    fn test_build_case_insensitive() {
        let builder = SuffixTrieBuilder::new(TrieConfig {
            case_insensitive: true,
            ..Default::default()
        });
        let trie = builder.build("HELLO").unwrap();
        assert!(trie.root().has_child('h'));
        assert!(!trie.root().has_child('H'));
        assert!(trie.config().case_insensitive);
    }
}
