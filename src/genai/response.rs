//! Post-processing of reply text.

use super::client::GenerationError;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json(.*?)```").expect("invalid json fence regex"));

static ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("invalid fence regex"));

static STEP_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Step\s+\d+:").expect("invalid step marker regex"));

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*").expect("invalid line break regex"));

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s+(.*?)$").expect("invalid numbered item regex"));

/// Unwrap a markdown code fence, preferring a ```` ```json ```` block.
///
/// Text without a complete fence is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let fence = if text.contains("```json") {
        &JSON_FENCE
    } else {
        &ANY_FENCE
    };

    fence
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or(text, |m| m.as_str())
        .trim()
}

/// Decode a (possibly fenced) JSON reply.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, GenerationError> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|e| GenerationError::Malformed(format!("invalid JSON: {}", e)))
}

/// Every `Step N: ...` segment, with internal line breaks collapsed.
///
/// A segment runs from its marker to the next marker or the end of text.
pub fn step_segments(text: &str) -> Vec<String> {
    let starts: Vec<usize> = STEP_MARKER.find_iter(text).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            LINE_BREAK.replace_all(text[start..end].trim(), " ").into_owned()
        })
        .collect()
}

/// Lines that start with a `Step N:` marker, trimmed.
pub fn step_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| STEP_MARKER.find(line).is_some_and(|m| m.start() == 0))
        .map(str::to_string)
        .collect()
}

/// Text of every `N. text` line.
pub fn numbered_items(text: &str) -> Vec<String> {
    NUMBERED_ITEM
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Non-blank lines that are not bare numbers, trimmed.
pub fn non_numeric_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}
