//! Loading texts and configuration for the command line

use crate::trie::TrieConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Read the text to index, either from a file or given inline.
///
/// A trailing newline in a file is kept; it is part of the text.
pub fn load_text(file: Option<&Path>, text: Option<&str>) -> Result<String> {
    match (file, text) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, Some(text)) => Ok(text.to_string()),
        (None, None) => anyhow::bail!("No input: pass --file or --text"),
    }
}

/// Load a JSON trie configuration, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<TrieConfig> {
    let Some(path) = path else {
        return Ok(TrieConfig::default());
    };

    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Invalid config {}", path.display()))
}
