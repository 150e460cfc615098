mod error;
mod outcome;
mod prompts;
mod runner;
mod session;

pub use error::RunError;
pub use outcome::RunOutcome;
pub use prompts::ConsultantPrompts;
pub use runner::RetryRunner;
pub use session::{AttemptRecord, RetrySession, DEFAULT_MAX_ATTEMPTS};
