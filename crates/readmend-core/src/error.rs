use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    /// The prompt round-trip itself failed. Transport errors are fatal
    /// and are never retried; the retry budget only covers malformed
    /// output from a model that did reply.
    #[error("model error: {0}")]
    Model(#[from] readmend_model::ModelError),
}
