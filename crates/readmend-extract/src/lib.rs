//! # readmend-extract
//!
//! Structured output extraction for readmend.
//!
//! Model replies are free-form prose with two fenced payloads embedded in
//! them: the improved README in a ```markdown block and a ```json block
//! holding a `changes_made` array. This crate recovers both.
//!
//! ## Key Types
//!
//! - [`ExtractionSession`] - One extraction attempt over a raw reply
//! - [`AttemptOutcome`] - Success or a typed failure
//! - [`ExtractedResult`] - The recovered document + change list
//! - [`ExtractionFailure`] - Why an attempt failed

mod blocks;
mod session;
mod validate;

pub use blocks::{extract_json_block, extract_markdown_block};
pub use session::{AttemptOutcome, ExtractedResult, ExtractionSession};
pub use validate::{validate_changes, ExtractionFailure, CHANGES_KEY};
