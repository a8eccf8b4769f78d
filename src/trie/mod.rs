//! Suffix trie indexing module
//!
//! Every suffix of a text is inserted into a character trie, so any
//! substring of the text is the prefix of some stored path.
//!
//! ## Architecture
//!
//! - `types`: Offsets, node ids, sentinel and configuration
//! - `node`: Trie vertices stored in the arena
//! - `tree`: The arena owner; construction and search
//! - `builder`: Configured construction with validation and progress
//! - `traversal`: Breadth-first iteration and depth grouping
//! - `stats`: Serializable summary of a built trie

pub mod builder;
pub mod node;
pub mod stats;
pub mod traversal;
pub mod tree;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixTrieBuilder;
pub use node::Node;
pub use stats::TrieStats;
pub use traversal::BreadthFirst;
pub use tree::{Ancestors, SuffixTrie};
pub use types::{NodeId, Offset, TrieConfig, DEFAULT_MAX_TEXT_LEN, ROOT, SENTINEL};
