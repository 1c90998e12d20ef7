//! Multilingual tokenizer with language marker tokens
//!
//! Multilingual checkpoints condition on the target language through a marker
//! token at the start of the text: `"[DE]guten[SPACE]tag"`. The marker is
//! prepended before the space substitution, so it is tokenized exactly like a
//! caller writing `"[DE]guten tag"` by hand.

use anyhow::Result;
use std::path::Path;
use tokenizers::Tokenizer;

use super::{Language, TextTokenizer, Vocabulary, MTL_VOCAB_FILE, SUPPORTED_LANGUAGES};

/// Tokenizer for multilingual Chatterbox checkpoints.
#[derive(Debug, Clone)]
pub struct MultilingualTokenizer {
    vocab: Vocabulary,
    /// Languages whose marker token is present in the vocabulary
    available: Vec<Language>,
}

impl MultilingualTokenizer {
    /// Load from a local path or HuggingFace model ID.
    ///
    /// Directories and Hub repos are searched for [`MTL_VOCAB_FILE`], not the
    /// English `tokenizer.json` stored alongside it.
    pub fn from_pretrained(source: &str) -> Result<Self> {
        Ok(Self::new(Vocabulary::from_pretrained_file(
            source,
            MTL_VOCAB_FILE,
        )?))
    }

    /// Load from a `tokenizer.json` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Vocabulary::from_file(path)?))
    }

    /// Create from a tokenizers::Tokenizer instance
    pub fn from_tokenizer(tokenizer: Tokenizer) -> Result<Self> {
        Ok(Self::new(Vocabulary::from_tokenizer(tokenizer)?))
    }

    /// Wrap a vocabulary, checking which language markers it contains.
    ///
    /// Missing markers are not an error; a vocabulary without any of them
    /// only gets a warning.
    pub fn new(vocab: Vocabulary) -> Self {
        let available: Vec<Language> = SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .filter(|lang| vocab.contains(lang.marker()))
            .collect();

        if available.is_empty() {
            tracing::warn!(
                "No language tokens found in vocabulary. Multilingual support may not work."
            );
        } else {
            let codes: Vec<&str> = available.iter().map(|lang| lang.code()).collect();
            tracing::info!(
                "Multilingual tokenizer initialized. Available languages: {}",
                codes.join(", ")
            );
        }

        Self { vocab, available }
    }

    /// Languages whose marker token exists in the vocabulary
    pub fn available_languages(&self) -> &[Language] {
        &self.available
    }

    pub fn supports(&self, language: Language) -> bool {
        self.available.contains(&language)
    }

    /// Encode with a typed language marker.
    ///
    /// The marker is prepended even when the vocabulary lacks it, in which
    /// case the tokenizer spells it out like any other text.
    pub fn encode_language(&self, text: &str, language: Language) -> Result<Vec<u32>> {
        if !self.supports(language) {
            tracing::warn!(
                "Language token {} not in vocabulary; encoding it as plain text",
                language.marker()
            );
        }
        tracing::debug!("Prepended language token: {}", language.marker());
        self.vocab.encode(&format!("{}{}", language.marker(), text))
    }
}

impl TextTokenizer for MultilingualTokenizer {
    fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Encode text, prepending the marker for `language_id` when it is a
    /// supported code. Unsupported codes are logged and ignored.
    fn encode(&self, text: &str, language_id: Option<&str>) -> Result<Vec<u32>> {
        let Some(code) = language_id else {
            return self.vocab.encode(text);
        };

        match Language::from_code(code) {
            Some(language) => self.encode_language(text, language),
            None => {
                tracing::warn!(
                    "Language '{}' not supported. Available: {}",
                    code,
                    Language::supported_codes()
                );
                self.vocab.encode(text)
            }
        }
    }
}
