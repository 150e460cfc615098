use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The key the prompt instructs the model to populate in its json block.
pub const CHANGES_KEY: &str = "changes_made";

/// Why a single extraction attempt failed.
///
/// All three variants are recoverable by re-prompting; the retry runner
/// pattern-matches on them rather than catching errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionFailure {
    #[error("no json block found in model output")]
    NoJsonBlock,

    #[error("invalid json content: {0}")]
    InvalidJson(String),

    #[error("json block has no 'changes_made' array")]
    MissingChangesKey,
}

impl ExtractionFailure {
    /// Short tag for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoJsonBlock => "no_json_block",
            Self::InvalidJson(_) => "invalid_json",
            Self::MissingChangesKey => "missing_changes_key",
        }
    }
}

/// Parse and validate the json payload, returning the change list.
///
/// The payload must be an object with a `changes_made` array. Elements are
/// coerced to strings; order is preserved exactly as the model wrote it,
/// since the list is a human-facing changelog.
pub fn validate_changes(json_text: &str) -> Result<Vec<String>, ExtractionFailure> {
    let value: Value = serde_json::from_str(json_text)
        .map_err(|e| ExtractionFailure::InvalidJson(e.to_string()))?;

    let changes = value
        .as_object()
        .and_then(|obj| obj.get(CHANGES_KEY))
        .and_then(Value::as_array)
        .ok_or(ExtractionFailure::MissingChangesKey)?;

    debug!(count = changes.len(), "Validated changes payload");

    Ok(changes
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect())
}
