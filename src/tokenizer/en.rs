//! English tokenizer

use anyhow::Result;
use std::path::Path;
use tokenizers::Tokenizer;

use super::{TextTokenizer, Vocabulary};

/// Tokenizer for English-only Chatterbox checkpoints.
///
/// The language id is accepted for interface compatibility and ignored.
#[derive(Debug, Clone)]
pub struct EnTokenizer {
    vocab: Vocabulary,
}

impl EnTokenizer {
    /// Load from a local path or HuggingFace model ID,
    /// see [`Vocabulary::from_pretrained`].
    pub fn from_pretrained(source: &str) -> Result<Self> {
        Ok(Self::new(Vocabulary::from_pretrained(source)?))
    }

    /// Load from a `tokenizer.json` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Vocabulary::from_file(path)?))
    }

    /// Create from a tokenizers::Tokenizer instance
    pub fn from_tokenizer(tokenizer: Tokenizer) -> Result<Self> {
        Ok(Self::new(Vocabulary::from_tokenizer(tokenizer)?))
    }

    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }
}

impl TextTokenizer for EnTokenizer {
    fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    fn encode(&self, text: &str, _language_id: Option<&str>) -> Result<Vec<u32>> {
        self.vocab.encode(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::fixtures::{mock_tokenizer, BASE_TOKENS, MULTILINGUAL_TOKENS};

    fn create_test_tokenizer() -> EnTokenizer {
        EnTokenizer::from_tokenizer(mock_tokenizer(BASE_TOKENS)).unwrap()
    }

    #[test]
    fn test_language_id_ignored() {
        let tokenizer = EnTokenizer::from_tokenizer(mock_tokenizer(MULTILINGUAL_TOKENS)).unwrap();
        assert_eq!(
            tokenizer.encode("hallo", Some("de")).unwrap(),
            tokenizer.encode("hallo", None).unwrap()
        );
    }

    #[test]
    fn test_roundtrip_without_spaces() {
        let tokenizer = create_test_tokenizer();
        let ids = tokenizer.encode("hello", None).unwrap();
        assert_eq!(ids.len(), 5);
        assert_eq!(tokenizer.decode(&ids).unwrap(), "hello");
    }

    #[test]
    fn test_roundtrip_with_spaces() {
        let tokenizer = create_test_tokenizer();
        let text = "the quick brown fox";
        let ids = tokenizer.encode(text, None).unwrap();
        assert_eq!(tokenizer.decode(&ids).unwrap(), text);
    }

    #[test]
    fn test_leading_and_repeated_spaces_survive() {
        let tokenizer = create_test_tokenizer();
        let text = " a  b ";
        let ids = tokenizer.encode(text, None).unwrap();
        assert_eq!(tokenizer.decode(&ids).unwrap(), text);
    }

    #[test]
    fn test_literal_sentinel_in_input_is_a_control_token() {
        // Known limitation: a literal `[STOP]` in the input cannot be told
        // apart from the control token and vanishes on decode.
        let tokenizer = create_test_tokenizer();
        let ids = tokenizer.encode("a[STOP]b", None).unwrap();
        assert!(ids.contains(&tokenizer.vocabulary().eot_token_id));
        assert_eq!(tokenizer.decode(&ids).unwrap(), "ab");
    }

    #[test]
    fn test_from_file_nonexistent() {
        assert!(EnTokenizer::from_file("/nonexistent/tokenizer.json").is_err());
    }

    #[test]
    fn test_from_pretrained_nonexistent() {
        assert!(EnTokenizer::from_pretrained("/nonexistent/path").is_err());
    }
}
