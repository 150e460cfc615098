use async_trait::async_trait;
use thiserror::Error;

/// Errors from the prompt-sending collaborator.
///
/// These are never retried by the extraction loop: a transport or API
/// failure is fatal and propagates straight to the caller.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("request to model backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model backend returned an error: {0}")]
    Api(String),

    #[error("model backend returned an empty reply")]
    EmptyReply,
}

/// The core abstraction for a generative model backend.
///
/// One blocking round-trip per call: the prompt goes out, the raw reply
/// comes back as opaque text. Extraction happens elsewhere.
#[async_trait]
pub trait Model: Send + Sync {
    /// Human-readable name of the backing model (e.g. "llama3")
    fn name(&self) -> &str;

    /// Send a prompt and return the model's raw textual reply
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;

    /// Check if the backend is reachable
    async fn is_available(&self) -> bool;
}
