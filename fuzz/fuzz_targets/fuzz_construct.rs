#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::trie::{SuffixTrieBuilder, TrieConfig};

fuzz_target!(|input: (String, String)| {
    // Build over arbitrary text and check every reported offset really matches
    let (text, query) = input;
    let builder = SuffixTrieBuilder::new(TrieConfig {
        max_text_len: Some(256),
        ..Default::default()
    });
    let Ok(trie) = builder.build(&text) else {
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let q: Vec<char> = query.chars().collect();
    if let Some(offsets) = trie.search(&query) {
        for offset in offsets {
            assert_eq!(&chars[offset..offset + q.len()], &q[..]);
        }
    }
});
