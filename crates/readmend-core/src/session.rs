use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Retry budget used when the caller does not override it.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// State for one enhancement run.
///
/// The prompt is built once and re-sent verbatim on every attempt: the
/// variability being tolerated is model nondeterminism, so an identical
/// prompt can still yield a well-formed reply the second time around.
#[derive(Debug, Clone)]
pub struct RetrySession {
    /// The prompt sent on every attempt
    pub prompt: String,
    /// Attempt budget
    pub max_attempts: usize,
    /// Attempts used so far (0-indexed while attempting)
    pub attempt: usize,
    /// Failure record per spent attempt
    pub history: Vec<AttemptRecord>,
    started_at: Instant,
}

/// Record of one failed attempt, kept for diagnostic reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub attempt_number: usize,
    pub reply_chars: usize,
    pub failure: String,
    pub timestamp: DateTime<Utc>,
}

impl RetrySession {
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempt: 0,
            history: Vec::new(),
            started_at: Instant::now(),
        }
    }

    pub fn with_max_attempts(mut self, max: usize) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn increment_attempt(&mut self) {
        self.attempt += 1;
    }

    pub fn push_record(&mut self, record: AttemptRecord) {
        self.history.push(record);
    }

    pub fn should_continue(&self) -> bool {
        self.attempt < self.max_attempts
    }

    pub fn total_duration(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_respected() {
        let mut session = RetrySession::new("prompt".into()).with_max_attempts(2);
        assert!(session.should_continue());
        session.increment_attempt();
        assert!(session.should_continue());
        session.increment_attempt();
        assert!(!session.should_continue());
    }

    #[test]
    fn default_budget_is_three() {
        let session = RetrySession::new("prompt".into());
        assert_eq!(session.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(session.max_attempts, 3);
    }
}
