use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Structured log events for the enhancement run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    RunStarted {
        model: String,
        max_attempts: usize,
        prompt_chars: usize,
    },
    AttemptStarted {
        attempt: usize,
        max_attempts: usize,
    },
    ModelResponded {
        attempt: usize,
        reply_chars: usize,
        duration_secs: f64,
    },
    ExtractionFailed {
        attempt: usize,
        reason: String,
    },
    RunCompleted {
        attempts: usize,
        changes: usize,
        duration_secs: f64,
    },
    AttemptsExhausted {
        attempts: usize,
    },
}

impl LogEvent {
    /// Add a timestamp to serialize with the event
    fn with_timestamp(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        value
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors
    #[default]
    Pretty,
    /// JSON lines format for machine consumption
    Json,
    /// Compact single-line format
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Logger for run events. Passed explicitly to whatever needs to emit
/// events; there is deliberately no global console.
pub struct Logger {
    format: LogFormat,
}

impl Logger {
    pub fn new(format: LogFormat) -> Self {
        Self { format }
    }

    pub fn log(&self, event: &LogEvent) {
        match self.format {
            LogFormat::Json => self.log_json(event),
            LogFormat::Pretty => self.log_pretty(event),
            LogFormat::Compact => self.log_compact(event),
        }
    }

    fn log_json(&self, event: &LogEvent) {
        let _ = writeln!(std::io::stderr(), "{}", event.with_timestamp());
    }

    fn log_pretty(&self, event: &LogEvent) {
        let mut stderr = std::io::stderr();
        match event {
            LogEvent::RunStarted {
                model,
                max_attempts,
                ..
            } => {
                let _ = writeln!(stderr);
                let _ = writeln!(
                    stderr,
                    "  {} Asking {} to improve the README (up to {} attempts)",
                    "->".bright_green(),
                    model.bold(),
                    max_attempts
                );
            }
            LogEvent::AttemptStarted {
                attempt,
                max_attempts,
            } => {
                let _ = writeln!(
                    stderr,
                    "  {} {}",
                    "▶".bright_cyan(),
                    format!("Attempt {}/{}", attempt + 1, max_attempts)
                        .bright_cyan()
                        .bold()
                );
            }
            LogEvent::ModelResponded {
                reply_chars,
                duration_secs,
                ..
            } => {
                let _ = writeln!(
                    stderr,
                    "    {} Reply received ({} chars, {:.1}s)",
                    "✓".bright_green(),
                    reply_chars,
                    duration_secs
                );
            }
            LogEvent::ExtractionFailed { reason, .. } => {
                let _ = writeln!(
                    stderr,
                    "    {} {}",
                    "✗".bright_red(),
                    format!("Extraction failed: {}", reason).bright_red()
                );
            }
            LogEvent::RunCompleted {
                attempts,
                changes,
                duration_secs,
            } => {
                let _ = writeln!(stderr);
                let _ = writeln!(
                    stderr,
                    "  {} Done in {} attempt(s): {} change(s), {:.1}s",
                    "✓".bright_green(),
                    attempts,
                    changes,
                    duration_secs
                );
            }
            LogEvent::AttemptsExhausted { attempts } => {
                let _ = writeln!(stderr);
                let _ = writeln!(
                    stderr,
                    "  {} Gave up after {} attempt(s)",
                    "⚠".bright_yellow(),
                    attempts
                );
            }
        }
    }

    fn log_compact(&self, event: &LogEvent) {
        let mut stderr = std::io::stderr();
        let timestamp = chrono::Utc::now().format("%H:%M:%S");
        let msg = match event {
            LogEvent::RunStarted {
                model,
                max_attempts,
                ..
            } => format!("[{}] run:start model={} max={}", timestamp, model, max_attempts),
            LogEvent::AttemptStarted { attempt, .. } => {
                format!("[{}] attempt:start:{}", timestamp, attempt + 1)
            }
            LogEvent::ModelResponded {
                attempt,
                reply_chars,
                duration_secs,
            } => format!(
                "[{}] attempt:reply:{} {}c {:.1}s",
                timestamp,
                attempt + 1,
                reply_chars,
                duration_secs
            ),
            LogEvent::ExtractionFailed { attempt, reason } => {
                format!("[{}] attempt:fail:{} {}", timestamp, attempt + 1, reason)
            }
            LogEvent::RunCompleted {
                attempts,
                duration_secs,
                ..
            } => format!("[{}] run:done:{} {:.1}s", timestamp, attempts, duration_secs),
            LogEvent::AttemptsExhausted { attempts } => {
                format!("[{}] run:exhausted:{}", timestamp, attempts)
            }
        };
        let _ = writeln!(stderr, "{}", msg);
    }
}
