mod ollama;
mod traits;

pub use ollama::{OllamaModel, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
pub use traits::{Model, ModelError};
