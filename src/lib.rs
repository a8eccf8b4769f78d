//! # sufx - Suffix Trie Substring Index
//!
//! sufx builds an in-memory index over a text and answers
//! substring-occurrence queries: every character offset where a query
//! starts.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`trie`] - Suffix trie construction, search and traversal
//! - [`error`] - Construction errors
//! - [`output`] - Result formatting for the command line
//! - [`utils`] - Input loading and progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use sufx::trie::SuffixTrie;
//!
//! let trie = SuffixTrie::construct("This is a test").unwrap();
//! assert_eq!(trie.search("is"), Some(vec![2, 5]));
//! assert_eq!(trie.search("qqqqq"), None);
//! ```
//!
//! ## Performance
//!
//! Construction inserts every suffix independently, so time and node count
//! are quadratic in the text length. Setting
//! [`trie::TrieConfig::max_text_len`] bounds the text accepted by the
//! builder; the library default accepts any length.

pub mod error;
pub mod output;
pub mod trie;
pub mod utils;

pub use error::{Result, TrieError};
pub use trie::{SuffixTrie, SuffixTrieBuilder, TrieConfig};
