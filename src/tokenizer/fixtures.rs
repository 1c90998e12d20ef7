//! In-memory vocabularies for unit tests.
//!
//! Mirrors the layout of a real Chatterbox `tokenizer.json`: a character-level
//! BPE model with no merges, a `Whitespace` pre-tokenizer, no decoder, and
//! every bracketed token registered as a special added token.

use serde_json::{json, Map, Value};
use tokenizers::Tokenizer;

use super::special;

/// The eight reserved tokens, with `[START]` = 0 and `[STOP]` = 1.
pub const BASE_TOKENS: &[&str] = &special::ALL;

/// Reserved tokens plus a handful of language markers.
pub const MULTILINGUAL_TOKENS: &[&str] = &[
    special::SOT,
    special::EOT,
    special::UNK,
    special::SPACE,
    special::PAD,
    special::SEP,
    special::CLS,
    special::MASK,
    "[EN]",
    "[DE]",
    "[FR]",
    "[JA]",
];

/// `tokenizer.json` contents for the given bracketed tokens followed by `a`-`z`.
pub fn mock_vocab_json(tokens: &[&str]) -> String {
    let mut vocab = Map::new();
    let mut added = Vec::new();
    for (id, token) in tokens.iter().enumerate() {
        vocab.insert(token.to_string(), json!(id));
        added.push(json!({
            "id": id,
            "content": token,
            "single_word": false,
            "lstrip": false,
            "rstrip": false,
            "normalized": false,
            "special": true,
        }));
    }
    for (offset, c) in ('a'..='z').enumerate() {
        vocab.insert(c.to_string(), json!(tokens.len() + offset));
    }

    json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": added,
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "BPE",
            "dropout": null,
            "unk_token": special::UNK,
            "continuing_subword_prefix": null,
            "end_of_word_suffix": null,
            "fuse_unk": false,
            "byte_fallback": false,
            "vocab": Value::Object(vocab),
            "merges": [],
        },
    })
    .to_string()
}

pub fn mock_tokenizer(tokens: &[&str]) -> Tokenizer {
    serde_json::from_str(&mock_vocab_json(tokens)).unwrap()
}
