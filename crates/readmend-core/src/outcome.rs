use serde::{Deserialize, Serialize};
use std::time::Duration;

use readmend_extract::ExtractedResult;

use crate::session::AttemptRecord;

/// Terminal result of an enhancement run.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// A well-formed reply was extracted before the budget ran out
    Success {
        result: ExtractedResult,
        attempts: usize,
        total_duration_secs: f64,
    },
    /// Every attempt produced malformed output
    Exhausted {
        attempts: usize,
        history: Vec<AttemptRecord>,
        total_duration_secs: f64,
    },
}

impl RunOutcome {
    pub fn success(result: ExtractedResult, attempts: usize, duration: Duration) -> Self {
        Self::Success {
            result,
            attempts,
            total_duration_secs: duration.as_secs_f64(),
        }
    }

    pub fn exhausted(attempts: usize, history: Vec<AttemptRecord>, duration: Duration) -> Self {
        Self::Exhausted {
            attempts,
            history,
            total_duration_secs: duration.as_secs_f64(),
        }
    }

    pub fn attempts(&self) -> usize {
        match self {
            Self::Success { attempts, .. } => *attempts,
            Self::Exhausted { attempts, .. } => *attempts,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success { .. } => 0,
            Self::Exhausted { .. } => 1,
        }
    }
}
