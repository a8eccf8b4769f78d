//! Error types for suffix trie construction.

use crate::trie::Offset;
use thiserror::Error;

/// Result type alias for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Errors raised while building or extending a trie.
///
/// Searching never fails; a missing match is reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The text contains the reserved sentinel character.
    #[error("text contains reserved sentinel {character:?} at offset {offset}")]
    ReservedCharacter {
        /// The offending character.
        character: char,
        /// Character offset of its first occurrence.
        offset: Offset,
    },

    /// A text character becomes the sentinel under case folding.
    #[error("text character {character:?} at offset {offset} folds to reserved sentinel {sentinel:?}")]
    FoldsToSentinel {
        /// The character as it appears in the text.
        character: char,
        /// The configured sentinel.
        sentinel: char,
        /// Character offset of its first occurrence.
        offset: Offset,
    },

    /// The text is longer than the configured maximum.
    #[error("text length {len} exceeds the configured maximum of {max} characters")]
    TextTooLong {
        /// Length of the rejected text, in characters.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
}
