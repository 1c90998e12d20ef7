//! HuggingFace Hub integration for downloading Chatterbox vocabularies.
//!
//! Enable with the `hub` feature. Files land in the regular HuggingFace cache,
//! so repeated loads don't hit the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use chatterbox_tokenizer::hub::{download_vocab, model_ids};
//!
//! let path = download_vocab(model_ids::CHATTERBOX, model_ids::EN_VOCAB_FILE)?;
//! let tokenizer = EnTokenizer::from_file(path)?;
//! ```

use anyhow::{anyhow, Result};
use hf_hub::api::sync::Api;
use std::path::PathBuf;

/// Default HuggingFace repository and file names.
pub mod model_ids {
    /// Repository holding the Chatterbox checkpoints
    pub const CHATTERBOX: &str = "ResembleAI/chatterbox";

    /// English vocabulary
    pub use crate::tokenizer::DEFAULT_VOCAB_FILE as EN_VOCAB_FILE;

    /// Multilingual vocabulary (includes the `[XX]` language markers)
    pub use crate::tokenizer::MTL_VOCAB_FILE;
}

/// Download a vocabulary file from the main branch of `repo_id`.
pub fn download_vocab(repo_id: &str, filename: &str) -> Result<PathBuf> {
    let api = Api::new().map_err(|e| anyhow!("Failed to create HuggingFace API: {}", e))?;

    tracing::info!("Downloading {} from {}", filename, repo_id);
    api.model(repo_id.to_string())
        .get(filename)
        .map_err(|e| anyhow!("Failed to download {} from '{}': {}", filename, repo_id, e))
}

/// Download a vocabulary file pinned to a revision (branch, tag, or commit hash).
pub fn download_vocab_revision(repo_id: &str, revision: &str, filename: &str) -> Result<PathBuf> {
    let api = Api::new().map_err(|e| anyhow!("Failed to create HuggingFace API: {}", e))?;

    tracing::info!("Downloading {} from {} @ {}", filename, repo_id, revision);
    let repo = api.repo(hf_hub::Repo::with_revision(
        repo_id.to_string(),
        hf_hub::RepoType::Model,
        revision.to_string(),
    ));
    repo.get(filename).map_err(|e| {
        anyhow!(
            "Failed to download {} from '{}' @ {}: {}",
            filename,
            repo_id,
            revision,
            e
        )
    })
}
