//! Tokenizer configuration
//!
//! A small JSON file selecting which vocabulary to load and which tokenizer
//! variant to wrap it in. Every field has a default, so `{}` is a valid
//! configuration for the English checkpoint and `{"kind": "multilingual"}`
//! one for the multilingual checkpoint.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::tokenizer::{
    EnTokenizer, MultilingualTokenizer, TextTokenizer, Vocabulary, DEFAULT_VOCAB_FILE,
    MTL_VOCAB_FILE,
};

/// Tokenizer variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// English checkpoint, no language markers
    #[default]
    En,
    /// Multilingual checkpoint, language marker prepended
    #[serde(alias = "mtl")]
    Multilingual,
}

impl TokenizerKind {
    /// Vocabulary filename a checkpoint of this kind ships
    pub fn default_vocab_file(&self) -> &'static str {
        match self {
            Self::En => DEFAULT_VOCAB_FILE,
            Self::Multilingual => MTL_VOCAB_FILE,
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Multilingual => write!(f, "multilingual"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Vocabulary filename looked up inside a model directory or Hub repo;
    /// `None` picks the one matching `kind`
    #[serde(default)]
    pub vocab_file: Option<String>,

    #[serde(default)]
    pub kind: TokenizerKind,

    /// Language used when the caller doesn't pass one
    #[serde(default)]
    pub language_id: Option<String>,

    /// Where to fetch the vocabulary when no local source is given
    #[serde(default = "default_repo_id")]
    pub repo_id: String,
}

fn default_repo_id() -> String {
    "ResembleAI/chatterbox".to_string()
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocab_file: None,
            kind: TokenizerKind::default(),
            language_id: None,
            repo_id: default_repo_id(),
        }
    }
}

impl TokenizerConfig {
    /// Parse from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tokenizer config from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse tokenizer config from {}", path.display()))
    }

    /// Vocabulary filename to resolve, explicit or by kind
    pub fn vocab_file(&self) -> &str {
        self.vocab_file
            .as_deref()
            .unwrap_or_else(|| self.kind.default_vocab_file())
    }

    /// Load the configured tokenizer.
    ///
    /// `source` is a vocabulary file, a model directory, or a Hub repo ID;
    /// `None` falls back to [`repo_id`](Self::repo_id).
    pub fn load(&self, source: Option<&str>) -> Result<Box<dyn TextTokenizer>> {
        let source = source.unwrap_or(self.repo_id.as_str());
        tracing::info!("Loading {} tokenizer from: {}", self.kind, source);

        let vocab = Vocabulary::from_pretrained_file(source, self.vocab_file())?;
        let tokenizer: Box<dyn TextTokenizer> = match self.kind {
            TokenizerKind::En => Box::new(EnTokenizer::new(vocab)),
            TokenizerKind::Multilingual => Box::new(MultilingualTokenizer::new(vocab)),
        };
        Ok(tokenizer)
    }

    /// `language` if given, else the configured default
    pub fn resolve_language<'a>(&'a self, language: Option<&'a str>) -> Option<&'a str> {
        language.or(self.language_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::fixtures::{mock_vocab_json, BASE_TOKENS, MULTILINGUAL_TOKENS};

    #[test]
    fn test_defaults() {
        let config = TokenizerConfig::default();
        assert_eq!(config.vocab_file, None);
        assert_eq!(config.vocab_file(), "tokenizer.json");
        assert_eq!(config.kind, TokenizerKind::En);
        assert_eq!(config.language_id, None);
        assert_eq!(config.repo_id, "ResembleAI/chatterbox");
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: TokenizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TokenizerConfig::default());
    }

    #[test]
    fn test_parse_multilingual() {
        let config: TokenizerConfig = serde_json::from_str(
            r#"{"kind": "multilingual", "vocab_file": "mtl.json", "language_id": "fr"}"#,
        )
        .unwrap();
        assert_eq!(config.kind, TokenizerKind::Multilingual);
        assert_eq!(config.vocab_file(), "mtl.json");
        assert_eq!(config.language_id.as_deref(), Some("fr"));
    }

    #[test]
    fn test_kind_alias() {
        let config: TokenizerConfig = serde_json::from_str(r#"{"kind": "mtl"}"#).unwrap();
        assert_eq!(config.kind, TokenizerKind::Multilingual);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(serde_json::from_str::<TokenizerConfig>(r#"{"kind": "klingon"}"#).is_err());
    }

    #[test]
    fn test_resolve_language() {
        let config = TokenizerConfig {
            language_id: Some("de".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_language(None), Some("de"));
        assert_eq!(config.resolve_language(Some("fr")), Some("fr"));
        assert_eq!(TokenizerConfig::default().resolve_language(None), None);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer_config.json");
        std::fs::write(&path, r#"{"kind": "multilingual"}"#).unwrap();
        let config = TokenizerConfig::from_file(&path).unwrap();
        assert_eq!(config.kind, TokenizerKind::Multilingual);
        assert_eq!(config.vocab_file(), MTL_VOCAB_FILE);
    }

    #[test]
    fn test_from_file_errors_mention_path() {
        let err = TokenizerConfig::from_file(Path::new("/nonexistent/config.json"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("/nonexistent/config.json"));
    }

    #[test]
    fn test_load_multilingual_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mtl.json"), mock_vocab_json(MULTILINGUAL_TOKENS)).unwrap();

        let config = TokenizerConfig {
            kind: TokenizerKind::Multilingual,
            vocab_file: Some("mtl.json".to_string()),
            ..Default::default()
        };
        let tokenizer = config.load(dir.path().to_str()).unwrap();
        let de = tokenizer.vocabulary().token_to_id("[DE]").unwrap();
        assert_eq!(tokenizer.encode("ja", Some("de")).unwrap()[0], de);
    }

    #[test]
    fn test_multilingual_kind_picks_multilingual_vocab() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_VOCAB_FILE),
            mock_vocab_json(BASE_TOKENS),
        )
        .unwrap();
        std::fs::write(
            dir.path().join(MTL_VOCAB_FILE),
            mock_vocab_json(MULTILINGUAL_TOKENS),
        )
        .unwrap();

        let config = TokenizerConfig {
            kind: TokenizerKind::Multilingual,
            ..Default::default()
        };
        let tokenizer = config.load(dir.path().to_str()).unwrap();
        let de = tokenizer.vocabulary().token_to_id("[DE]").unwrap();
        assert_eq!(tokenizer.encode("ja", Some("de")).unwrap()[0], de);

        // Same directory, English kind: the base vocabulary has no markers
        let en = TokenizerConfig::default().load(dir.path().to_str()).unwrap();
        assert!(!en.vocabulary().contains("[DE]"));
    }

    #[test]
    fn test_load_en_ignores_language() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tokenizer.json"),
            mock_vocab_json(MULTILINGUAL_TOKENS),
        )
        .unwrap();

        let tokenizer = TokenizerConfig::default()
            .load(dir.path().to_str())
            .unwrap();
        assert_eq!(
            tokenizer.encode("ja", Some("de")).unwrap(),
            tokenizer.encode("ja", None).unwrap()
        );
    }

    #[test]
    fn test_display_kind() {
        assert_eq!(TokenizerKind::En.to_string(), "en");
        assert_eq!(TokenizerKind::Multilingual.to_string(), "multilingual");
    }
}
