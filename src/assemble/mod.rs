//! Content assembly: turn a parsed prompt into a complete content record.
//!
//! Title, compute steps, check steps and missing connect questions are
//! requested from the text generator one at a time. Each field has its own
//! fixed fallback, so assembly always succeeds.

mod fallback;
mod generate;
mod prompts;


pub use generate::{
    assemble_content, generate_check_steps, generate_compute_steps, generate_connect_questions,
    generate_title, merge_connect_questions,
};
