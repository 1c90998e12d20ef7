//! Text tokenization for Chatterbox TTS
//!
//! Uses HuggingFace's tokenizers library (written in Rust) to load the
//! Chatterbox `tokenizer.json` vocabularies. Two variants share one
//! capability interface, [`TextTokenizer`]:
//!
//! - [`EnTokenizer`]: English checkpoints, language id ignored
//! - [`MultilingualTokenizer`]: prepends a language marker such as `[DE]`

mod en;
mod language;
mod multilingual;
pub mod special;
mod vocab;

#[cfg(test)]
pub(crate) mod fixtures;

pub use en::EnTokenizer;
pub use language::{Language, SUPPORTED_LANGUAGES};
pub use multilingual::MultilingualTokenizer;
pub use special as special_tokens;
pub use vocab::{Vocabulary, DEFAULT_VOCAB_FILE, MTL_VOCAB_FILE};

use anyhow::{anyhow, bail, Result};
use candle_core::{DType, Device, Tensor};

/// Converts text to token ids for the model and generated ids back to text.
pub trait TextTokenizer: Send + Sync {
    /// The vocabulary this tokenizer encodes against
    fn vocabulary(&self) -> &Vocabulary;

    /// Encode text to token IDs, optionally tagged with a language code.
    fn encode(&self, text: &str, language_id: Option<&str>) -> Result<Vec<u32>>;

    /// Decode token IDs back to text
    fn decode(&self, ids: &[u32]) -> Result<String> {
        self.vocabulary().decode(ids)
    }

    /// Encode with `[START]` prepended and `[STOP]` appended
    fn encode_with_special(&self, text: &str, language_id: Option<&str>) -> Result<Vec<u32>> {
        let vocab = self.vocabulary();
        let mut ids = vec![vocab.sot_token_id];
        ids.extend(self.encode(text, language_id)?);
        ids.push(vocab.eot_token_id);
        Ok(ids)
    }

    /// Batch encode multiple texts with the same language
    fn encode_batch(&self, texts: &[&str], language_id: Option<&str>) -> Result<Vec<Vec<u32>>> {
        texts
            .iter()
            .map(|text| self.encode(text, language_id))
            .collect()
    }

    /// Encode and pad to max length.
    ///
    /// Longer sequences are truncated. Shorter ones are left-padded with
    /// `[PAD]`, or `[STOP]` when the vocabulary has no pad token.
    fn encode_padded(
        &self,
        text: &str,
        language_id: Option<&str>,
        max_length: usize,
    ) -> Result<Vec<u32>> {
        let mut ids = self.encode(text, language_id)?;

        if ids.len() > max_length {
            ids.truncate(max_length);
        } else {
            // Left-pad for TTS (causal attention)
            let vocab = self.vocabulary();
            let pad_id = vocab.pad_token_id.unwrap_or(vocab.eot_token_id);
            let mut padded = vec![pad_id; max_length - ids.len()];
            padded.extend(ids);
            ids = padded;
        }

        Ok(ids)
    }

    /// Encode into a `[1, N]` `U32` tensor ready for the model.
    fn text_to_tokens(
        &self,
        text: &str,
        language_id: Option<&str>,
        device: &Device,
    ) -> Result<Tensor> {
        let ids = self.encode(text, language_id)?;
        Ok(Tensor::new(ids.as_slice(), device)?.unsqueeze(0)?)
    }

    /// Decode a tensor of token IDs of any shape.
    ///
    /// Accepts `U32`, `U8` and `I64` tensors; negative or oversized `I64`
    /// ids are an error.
    fn decode_tensor(&self, tokens: &Tensor) -> Result<String> {
        let flat = tokens.flatten_all()?;
        let ids: Vec<u32> = match flat.dtype() {
            DType::U32 => flat.to_vec1::<u32>()?,
            DType::U8 => flat
                .to_vec1::<u8>()?
                .into_iter()
                .map(u32::from)
                .collect(),
            DType::I64 => flat
                .to_vec1::<i64>()?
                .into_iter()
                .map(|id| u32::try_from(id).map_err(|_| anyhow!("Token id {} out of range", id)))
                .collect::<Result<_>>()?,
            other => bail!("Token tensor must have an integer dtype, got {:?}", other),
        };
        self.decode(&ids)
    }
}
