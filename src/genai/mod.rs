//! Text-generation service access.
//!
//! Every call site goes through [`generate_or`], which turns a missing
//! credential, a failed request or an unusable reply into a deterministic
//! fallback value tagged with a [`FallbackReason`]. Nothing in this module
//! returns a crate error; generation failures never abort a command.

mod client;
mod outcome;
mod response;

#[cfg(test)]
mod tests;

pub use client::{CompletionRequest, GenerationError, OpenAiClient, TextGenerator, connect};
pub use outcome::{FallbackReason, Generated, generate_or};
pub use response::{
    non_numeric_lines, numbered_items, parse_json, step_lines, step_segments, strip_code_fence,
};
