use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::blocks::{extract_json_block, extract_markdown_block};
use crate::validate::{validate_changes, ExtractionFailure};

/// The structured artifacts recovered from one model reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedResult {
    /// Improved README body. May be empty if the model omitted the
    /// markdown block; the caller treats that as "nothing to write".
    pub document: String,
    /// Model-reported changelog, in the model's own order.
    pub changes: Vec<String>,
}

/// Result of one extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success(ExtractedResult),
    Failure(ExtractionFailure),
}

impl AttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// One extraction pass over a raw model reply.
pub struct ExtractionSession;

impl ExtractionSession {
    /// Run a single attempt: recover the document and the change list.
    ///
    /// The markdown block is extracted unconditionally before the json
    /// block is looked at. The two are independent spans of the same
    /// reply, and a partially usable reply (document present, changes
    /// missing) should still fail with the precise json reason rather
    /// than be discarded wholesale.
    pub fn run(raw_response: &str) -> AttemptOutcome {
        debug!(response_len = raw_response.len(), "Running extraction");

        let document = extract_markdown_block(raw_response);

        let Some(json_content) = extract_json_block(raw_response) else {
            return AttemptOutcome::Failure(ExtractionFailure::NoJsonBlock);
        };

        match validate_changes(&json_content) {
            Ok(changes) => AttemptOutcome::Success(ExtractedResult { document, changes }),
            Err(failure) => AttemptOutcome::Failure(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"
Here is your improved README.

```markdown
# My Project

A better description.
```

And the changes I made:

```json
{"changes_made": ["Rewrote description", "Added heading"]}
```
"#;

    #[test]
    fn well_formed_reply_succeeds() {
        let outcome = ExtractionSession::run(WELL_FORMED);
        let AttemptOutcome::Success(result) = outcome else {
            panic!("expected success");
        };
        assert!(result.document.starts_with("# My Project"));
        assert_eq!(result.changes.len(), 2);
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = ExtractionSession::run(WELL_FORMED);
        let second = ExtractionSession::run(WELL_FORMED);
        assert_eq!(first, second);
        assert!(first.is_success());
    }

    #[test]
    fn last_json_block_wins() {
        let reply = r#"
```markdown
# Doc
```
```json
{"changes_made": ["from the draft block"]}
```
```json
{"changes_made": ["from the final block"]}
```
"#;
        let AttemptOutcome::Success(result) = ExtractionSession::run(reply) else {
            panic!("expected success");
        };
        assert_eq!(result.changes, vec!["from the final block"]);
    }

    #[test]
    fn missing_markdown_is_lenient() {
        let reply = "```json\n{\"changes_made\": [\"only changes\"]}\n```";
        let AttemptOutcome::Success(result) = ExtractionSession::run(reply) else {
            panic!("expected success");
        };
        assert_eq!(result.document, "");
        assert_eq!(result.changes, vec!["only changes"]);
    }

    #[test]
    fn missing_json_fails() {
        let reply = "```markdown\n# Doc\n```\nNo json anywhere.";
        assert_eq!(
            ExtractionSession::run(reply),
            AttemptOutcome::Failure(ExtractionFailure::NoJsonBlock)
        );
    }

    #[test]
    fn malformed_json_fails_without_panicking() {
        let reply = "```json\n{\"changes_made\": [unquoted]}\n```";
        match ExtractionSession::run(reply) {
            AttemptOutcome::Failure(ExtractionFailure::InvalidJson(_)) => {}
            other => panic!("expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn parseable_json_without_key_fails() {
        let reply = "```json\n{\"notes\": []}\n```";
        assert_eq!(
            ExtractionSession::run(reply),
            AttemptOutcome::Failure(ExtractionFailure::MissingChangesKey)
        );
    }
}
