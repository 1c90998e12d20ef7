//! Vocabulary loading and the raw encode/decode conventions shared by every
//! Chatterbox tokenizer variant.

use anyhow::{anyhow, bail, Result};
use std::path::Path;
use tokenizers::Tokenizer;

use super::special;

/// Default vocabulary filename inside a model directory
pub const DEFAULT_VOCAB_FILE: &str = "tokenizer.json";

/// Multilingual vocabulary filename; checkpoints ship it next to the English
/// `tokenizer.json`
pub const MTL_VOCAB_FILE: &str = "grapheme_mtl_merged_expanded_v1.json";

/// A loaded Chatterbox vocabulary.
///
/// Wraps a HuggingFace [`Tokenizer`] that is known to contain the `[START]`
/// and `[STOP]` tokens. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tokenizer: Tokenizer,
    /// `[START]` token ID
    pub sot_token_id: u32,
    /// `[STOP]` token ID
    pub eot_token_id: u32,
    /// `[SPACE]` token ID, if the vocabulary has one
    pub space_token_id: Option<u32>,
    /// `[UNK]` token ID, if the vocabulary has one
    pub unk_token_id: Option<u32>,
    /// `[PAD]` token ID, if the vocabulary has one
    pub pad_token_id: Option<u32>,
}

impl Vocabulary {
    /// Load a vocabulary from a local path or HuggingFace model ID.
    ///
    /// Resolution order:
    /// 1. Direct file path
    /// 2. Directory containing `tokenizer.json`
    /// 3. HuggingFace Hub download (if `hub` feature enabled)
    pub fn from_pretrained(source: &str) -> Result<Self> {
        Self::from_pretrained_file(source, DEFAULT_VOCAB_FILE)
    }

    /// Like [`from_pretrained`](Self::from_pretrained), with a custom
    /// vocabulary filename (multilingual checkpoints ship theirs under a
    /// different name).
    pub fn from_pretrained_file(source: &str, vocab_file: &str) -> Result<Self> {
        let path = Path::new(source);

        if path.is_file() {
            return Self::from_file(path);
        }

        if path.join(vocab_file).is_file() {
            return Self::from_file(path.join(vocab_file));
        }

        if path.is_dir() {
            bail!(
                "No vocabulary found in '{}'. Expected {}.",
                source,
                vocab_file
            );
        }

        #[cfg(feature = "hub")]
        {
            tracing::info!(
                "Downloading vocabulary from HuggingFace Hub: {}/{}",
                source,
                vocab_file
            );
            let file = crate::hub::download_vocab(source, vocab_file)?;
            Self::from_file(file)
        }

        #[cfg(not(feature = "hub"))]
        Err(anyhow!(
            "No vocabulary found at '{}' and hub feature is disabled",
            source
        ))
    }

    /// Load a vocabulary from a `tokenizer.json` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::from_file(path)
            .map_err(|e| anyhow!("Failed to load vocabulary from {}: {}", path.display(), e))?;

        tracing::debug!("Loaded vocabulary from {}", path.display());
        Self::from_tokenizer(tokenizer)
    }

    /// Wrap an already-built tokenizer, checking the required special tokens.
    pub fn from_tokenizer(tokenizer: Tokenizer) -> Result<Self> {
        let lookup = |token: &str| tokenizer.token_to_id(token);
        let (sot_token_id, eot_token_id) = match (lookup(special::SOT), lookup(special::EOT)) {
            (Some(sot), Some(eot)) => (sot, eot),
            _ => {
                let missing: Vec<&str> = special::REQUIRED
                    .iter()
                    .copied()
                    .filter(|&token| lookup(token).is_none())
                    .collect();
                bail!(
                    "Vocabulary is missing required special tokens: {}",
                    missing.join(", ")
                );
            }
        };
        let space_token_id = lookup(special::SPACE);
        let unk_token_id = lookup(special::UNK);
        let pad_token_id = lookup(special::PAD);

        if space_token_id.is_none() {
            tracing::warn!(
                "Vocabulary has no {} token; spaces will not survive encoding",
                special::SPACE
            );
        }

        Ok(Self {
            tokenizer,
            sot_token_id,
            eot_token_id,
            space_token_id,
            unk_token_id,
            pad_token_id,
        })
    }

    /// Encode text with the space sentinel convention.
    ///
    /// Every literal space becomes `[SPACE]` before the text reaches the
    /// underlying tokenizer. Special tokens and any post-processor configured
    /// in the vocabulary file are applied.
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let text = text.replace(' ', special::SPACE);
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow!("Failed to encode text: {}", e))?;

        Ok(encoding.get_ids().to_vec())
    }

    /// Decode token IDs back to text.
    ///
    /// The tokenizer joins tokens with spaces, so those are dropped first;
    /// then `[SPACE]` becomes a literal space and every `[STOP]` / `[UNK]`
    /// substring is removed. Removal works on the decoded string, so a
    /// sentinel spelled out by ordinary tokens is removed as well.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        let text = self
            .tokenizer
            .decode(ids, false)
            .map_err(|e| anyhow!("Failed to decode tokens: {}", e))?;

        Ok(text
            .replace(' ', "")
            .replace(special::SPACE, " ")
            .replace(special::EOT, "")
            .replace(special::UNK, ""))
    }

    /// Get vocabulary size, including added tokens
    pub fn vocab_size(&self) -> usize {
        self.tokenizer.get_vocab_size(true)
    }

    /// Convert token to ID
    pub fn token_to_id(&self, token: &str) -> Option<u32> {
        self.tokenizer.token_to_id(token)
    }

    /// Convert ID to token
    pub fn id_to_token(&self, id: u32) -> Option<String> {
        self.tokenizer.id_to_token(id)
    }

    /// Whether `token` is in the vocabulary
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id(token).is_some()
    }

    /// The underlying HuggingFace tokenizer
    pub fn inner(&self) -> &Tokenizer {
        &self.tokenizer
    }
}
