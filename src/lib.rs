//! # chatterbox-tokenizer
//!
//! Text tokenization for [Chatterbox](https://github.com/resemble-ai/chatterbox)
//! multilingual text-to-speech.
//!
//! Converts raw text into the token-id sequences consumed by the Chatterbox
//! text-to-speech transformer, and converts generated ids back into text.
//! The heavy lifting is done by HuggingFace's `tokenizers` library; this crate
//! adds the Chatterbox conventions on top of it:
//!
//! - Literal spaces are encoded as the `[SPACE]` sentinel token
//! - `[START]` / `[STOP]` must be present in the vocabulary
//! - Multilingual models take a language marker (`[EN]`, `[DE]`, ...) prepended
//!   to the text
//! - Decoding strips `[STOP]` / `[UNK]` and restores spaces
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chatterbox_tokenizer::{MultilingualTokenizer, TextTokenizer};
//! use candle_core::Device;
//!
//! let tokenizer = MultilingualTokenizer::from_pretrained("path/to/model")?;
//!
//! // Token ids with the German marker prepended
//! let ids = tokenizer.encode("Guten Tag", Some("de"))?;
//!
//! // Or as a `[1, N]` tensor ready for the model
//! let tokens = tokenizer.text_to_tokens("Guten Tag", Some("de"), &Device::Cpu)?;
//!
//! let text = tokenizer.decode(&ids)?;
//! ```
//!
//! ## Variants
//!
//! | Variant | Vocabulary | Language marker |
//! |---------|------------|-----------------|
//! | [`EnTokenizer`] | `tokenizer.json` | ignored |
//! | [`MultilingualTokenizer`] | `grapheme_mtl_merged_expanded_v1.json` | prepended when the code is supported |
//!
//! Both implement [`TextTokenizer`], so callers can hold either behind
//! `Box<dyn TextTokenizer>` (see [`TokenizerConfig::load`]).

pub mod config;
pub mod device;
#[cfg(feature = "hub")]
pub mod hub;
pub mod tokenizer;

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-exports for convenience
pub use config::{TokenizerConfig, TokenizerKind};
pub use device::{auto_device, device_info, parse_device};
pub use tokenizer::{
    special_tokens, EnTokenizer, Language, MultilingualTokenizer, TextTokenizer, Vocabulary,
    DEFAULT_VOCAB_FILE, MTL_VOCAB_FILE, SUPPORTED_LANGUAGES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_semver() {
        let core = VERSION.split(['-', '+']).next().unwrap();
        let parts: Vec<&str> = core.split('.').collect();
        assert_eq!(parts.len(), 3, "unexpected version {VERSION}");
        for part in parts {
            assert!(part.parse::<u64>().is_ok(), "unexpected version {VERSION}");
        }
    }

    #[test]
    fn test_supported_languages_exported() {
        assert_eq!(SUPPORTED_LANGUAGES.len(), 17);
    }
}
