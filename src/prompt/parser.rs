//! Section extraction from raw prompt text.

use super::model::{ConnectOption, ConnectQuestion, PromptRecord};
use regex::Regex;
use std::sync::LazyLock;

static GRADE_LEVEL: LazyLock<Regex> = LazyLock::new(|| single_line("GRADE LEVEL:"));
static CONCEPT: LazyLock<Regex> = LazyLock::new(|| single_line("CONCEPT:"));
static OBJECTIVES: LazyLock<Regex> = LazyLock::new(|| block("LEARNING OBJECTIVES:"));
static QUESTION: LazyLock<Regex> = LazyLock::new(|| block("QUESTION/PROMPT:"));
static HINTS: LazyLock<Regex> = LazyLock::new(|| block("HINTS FOR SOLUTION:"));
static CONNECT: LazyLock<Regex> = LazyLock::new(|| block("CONNECT QUESTIONS:"));
static NOTES: LazyLock<Regex> = LazyLock::new(|| block("ADDITIONAL NOTES:"));

/// Separator between numbered connect questions: a newline followed by `N. `.
static QUESTION_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\d+\.\s+").expect("invalid question split regex"));

/// Leading `N. ` marker on the first connect question.
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+").expect("invalid leading number regex"));

/// Header followed by the rest of a line. Whitespace after the header,
/// newlines included, is skipped first.
fn single_line(header: &str) -> Regex {
    Regex::new(&format!(r"{}\s*([^\n]*)", regex::escape(header))).expect("invalid header regex")
}

/// Header followed by everything up to the next blank line or end of input.
fn block(header: &str) -> Regex {
    Regex::new(&format!(r"(?s){}\s*(.*?)(?:\n\n|\z)", regex::escape(header)))
        .expect("invalid section regex")
}

fn capture<'a>(re: &Regex, content: &'a str) -> Option<&'a str> {
    re.captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Parse raw prompt text into a [`PromptRecord`].
///
/// Pure text transform; every section is optional.
pub fn parse_prompt(content: &str) -> PromptRecord {
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();

    let text = |re: &Regex| {
        capture(re, content)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    PromptRecord {
        grade_level: text(&GRADE_LEVEL),
        concept: text(&CONCEPT),
        objectives: capture(&OBJECTIVES, content)
            .map(split_list)
            .unwrap_or_default(),
        question: text(&QUESTION),
        hints: capture(&HINTS, content).map(split_list).unwrap_or_default(),
        connect_questions: capture(&CONNECT, content)
            .map(parse_connect_questions)
            .unwrap_or_default(),
        notes: text(&NOTES),
    }
}

/// Split a `-` bulleted section into items.
///
/// Items are separated by `\n-`. When the section's first line has no `-`
/// marker, that whole line becomes the first item and anything else in the
/// first chunk is dropped.
pub(crate) fn split_list(section: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();

    for (index, chunk) in section.split("\n-").enumerate() {
        if chunk.trim().is_empty() {
            continue;
        }
        let item = if index == 0 {
            chunk.trim().trim_start_matches('-').trim()
        } else {
            chunk.trim()
        };
        items.push(item.to_string());
    }

    if let Some(first) = items.first_mut()
        && !section.trim().starts_with('-')
    {
        *first = section.split('\n').next().unwrap_or_default().trim().to_string();
    }

    items
}

/// Split the connect section into numbered question blocks.
pub(crate) fn parse_connect_questions(section: &str) -> Vec<ConnectQuestion> {
    let section = section.trim();

    QUESTION_SPLIT
        .split(section)
        .enumerate()
        .filter_map(|(index, block)| {
            let block = if index == 0 {
                LEADING_NUMBER.replace(block, "")
            } else {
                block.into()
            };
            parse_question_block(&block)
        })
        .collect()
}

/// First line is the question; tagged lines are options.
fn parse_question_block(block: &str) -> Option<ConnectQuestion> {
    if block.trim().is_empty() {
        return None;
    }

    let mut lines = block.split('\n');
    let question = lines.next().unwrap_or_default().trim().to_string();

    let options: Vec<ConnectOption> = lines
        .map(str::trim)
        .filter_map(|line| {
            if let Some(text) = line.strip_prefix("CORRECT:") {
                Some(ConnectOption::correct(text.trim()))
            } else {
                line.strip_prefix("WRONG:")
                    .map(|text| ConnectOption::wrong(text.trim()))
            }
        })
        .collect();

    if question.is_empty() || options.is_empty() {
        log::debug!("dropping connect question block without options: {:?}", block);
        return None;
    }

    Some(ConnectQuestion { question, options })
}
