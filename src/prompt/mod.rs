//! Prompt parsing.
//!
//! A prompt file is free text with optional sections introduced by fixed
//! uppercase headers:
//!
//! - `GRADE LEVEL:` and `CONCEPT:` - single line values
//! - `LEARNING OBJECTIVES:` and `HINTS FOR SOLUTION:` - `-` bulleted lists
//! - `QUESTION/PROMPT:` and `ADDITIONAL NOTES:` - free text
//! - `CONNECT QUESTIONS:` - numbered questions with `CORRECT:`/`WRONG:` options
//!
//! Multi-line sections end at the first blank line. A missing section is not
//! an error; the field is simply empty.

mod model;
mod parser;

#[cfg(test)]
mod tests;

pub use model::{ConnectOption, ConnectQuestion, PromptRecord};
pub use parser::parse_prompt;
