use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use readmend_extract::{AttemptOutcome, ExtractionSession};
use readmend_logging::{LogEvent, Logger};
use readmend_model::Model;

use crate::error::RunError;
use crate::outcome::RunOutcome;
use crate::session::{AttemptRecord, RetrySession};

/// Drives the prompt/extract loop until success or exhaustion.
///
/// Each attempt is one full round-trip: send the session's prompt, run an
/// extraction pass over the raw reply. The loop is strictly sequential
/// and stops at the first success; malformed replies burn an attempt,
/// model transport errors abort the run.
pub struct RetryRunner<'a> {
    model: &'a dyn Model,
    logger: Arc<Logger>,
}

impl<'a> RetryRunner<'a> {
    pub fn new(model: &'a dyn Model, logger: Arc<Logger>) -> Self {
        Self { model, logger }
    }

    pub async fn run(&self, mut session: RetrySession) -> Result<RunOutcome, RunError> {
        self.logger.log(&LogEvent::RunStarted {
            model: self.model.name().to_string(),
            max_attempts: session.max_attempts,
            prompt_chars: session.prompt.len(),
        });

        loop {
            if !session.should_continue() {
                self.logger.log(&LogEvent::AttemptsExhausted {
                    attempts: session.attempt,
                });
                let duration = session.total_duration();
                return Ok(RunOutcome::exhausted(
                    session.attempt,
                    session.history,
                    duration,
                ));
            }

            let attempt = session.attempt;
            self.logger.log(&LogEvent::AttemptStarted {
                attempt,
                max_attempts: session.max_attempts,
            });

            debug!(attempt, "Sending prompt to model");
            let started = Instant::now();
            let raw_response = self.model.complete(&session.prompt).await?;

            self.logger.log(&LogEvent::ModelResponded {
                attempt,
                reply_chars: raw_response.len(),
                duration_secs: started.elapsed().as_secs_f64(),
            });

            match ExtractionSession::run(&raw_response) {
                AttemptOutcome::Success(result) => {
                    info!(attempts = attempt + 1, "Extraction succeeded");
                    self.logger.log(&LogEvent::RunCompleted {
                        attempts: attempt + 1,
                        changes: result.changes.len(),
                        duration_secs: session.total_duration().as_secs_f64(),
                    });
                    return Ok(RunOutcome::success(
                        result,
                        attempt + 1,
                        session.total_duration(),
                    ));
                }
                AttemptOutcome::Failure(failure) => {
                    warn!(attempt, reason = %failure, "Extraction failed");
                    self.logger.log(&LogEvent::ExtractionFailed {
                        attempt,
                        reason: failure.to_string(),
                    });
                    session.push_record(AttemptRecord {
                        attempt_number: attempt,
                        reply_chars: raw_response.len(),
                        failure: failure.to_string(),
                        timestamp: Utc::now(),
                    });
                    session.increment_attempt();
                }
            }
        }
    }
}
