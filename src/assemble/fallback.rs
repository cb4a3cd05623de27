//! Deterministic stand-ins for generated content.

use crate::genai::FallbackReason;
use crate::prompt::{ConnectOption, ConnectQuestion};
use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("invalid word regex"));

const STOP_WORDS: [&str; 7] = ["with", "what", "that", "this", "from", "have", "been"];

const KEYWORD_TITLE_WORDS: usize = 3;

pub(crate) const GENERIC_TITLE: &str = "Math Visualization Challenge";
pub(crate) const FAILED_TITLE: &str = "Volume Transformation Challenge";

pub(crate) const CHECK_STEP_COUNT: usize = 5;
pub(crate) const CONNECT_QUESTION_COUNT: usize = 2;

const FIXED_COMPUTE_STEPS: [&str; 4] = [
    "Step 1: Calculate the volume of the original shape",
    "Step 2: Determine the equation for the new shape",
    "Step 3: Solve for the unknown dimension",
    "Step 4: Verify the solution",
];

const FIXED_CHECK_STEPS: [&str; CHECK_STEP_COUNT] = [
    "Check if the volume of the original shape equals the volume of the new shape",
    "Verify your calculations by substituting the values",
    "Consider if your answer makes sense in the context of the problem",
    "Calculate the surface area of both shapes to observe how it changes",
    "Try with different numbers to see if the pattern holds",
];

pub(crate) fn title(concept: &str, question: &str, reason: FallbackReason) -> String {
    match reason {
        FallbackReason::NoCredential => keyword_title(concept, question),
        _ => FAILED_TITLE.to_string(),
    }
}

/// Up to three significant words of the concept and question, title-cased,
/// followed by " Challenge".
pub(crate) fn keyword_title(concept: &str, question: &str) -> String {
    let text = format!("{} {}", concept, question);
    let words: Vec<&str> = WORD
        .find_iter(&text)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > 3 && !STOP_WORDS.contains(&w.to_lowercase().as_str()))
        .take(KEYWORD_TITLE_WORDS)
        .collect();

    if words.is_empty() {
        return GENERIC_TITLE.to_string();
    }
    format!("{} Challenge", title_case(&words.join(" ")))
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

pub(crate) fn compute_steps(hints: &[String], reason: FallbackReason) -> Vec<String> {
    match reason {
        FallbackReason::NoCredential => std::iter::once(FIXED_COMPUTE_STEPS[0].to_string())
            .chain(
                hints
                    .iter()
                    .enumerate()
                    .map(|(i, hint)| format!("Step {}: {}", i + 2, hint)),
            )
            .collect(),
        _ => FIXED_COMPUTE_STEPS.iter().map(|s| s.to_string()).collect(),
    }
}

pub(crate) fn check_steps() -> Vec<String> {
    FIXED_CHECK_STEPS.iter().map(|s| s.to_string()).collect()
}

/// Pad to exactly five check steps.
pub(crate) fn pad_check_steps(mut steps: Vec<String>) -> Vec<String> {
    while steps.len() < CHECK_STEP_COUNT {
        steps.push(format!("Check your work for step {}", steps.len() + 1));
    }
    steps.truncate(CHECK_STEP_COUNT);
    steps
}

fn multiple_choice(question: &str, correct: &str, wrong: [&str; 3]) -> ConnectQuestion {
    ConnectQuestion {
        question: question.to_string(),
        options: std::iter::once(ConnectOption::correct(correct))
            .chain(wrong.into_iter().map(ConnectOption::wrong))
            .collect(),
    }
}

pub(crate) fn connect_questions() -> Vec<ConnectQuestion> {
    vec![
        multiple_choice(
            "Which formula should you use to solve this problem?",
            "The correct formula based on the problem context",
            [
                "An incorrect formula that seems plausible",
                "A formula from a different mathematical concept",
                "No formula is needed for this problem",
            ],
        ),
        multiple_choice(
            "What is the first step in solving this problem?",
            "The correct first step for this problem",
            [
                "A step that should come later in the solution",
                "An unnecessary step that doesn't help solve the problem",
                "A step that would lead to an incorrect solution",
            ],
        ),
    ]
}

/// Pad generated questions to exactly two.
pub(crate) fn pad_connect_questions(mut questions: Vec<ConnectQuestion>) -> Vec<ConnectQuestion> {
    while questions.len() < CONNECT_QUESTION_COUNT {
        questions.push(multiple_choice(
            "What concept does this problem test?",
            "The correct mathematical concept",
            [
                "A related but incorrect concept",
                "An unrelated mathematical concept",
                "This problem doesn't test any specific concept",
            ],
        ));
    }
    questions.truncate(CONNECT_QUESTION_COUNT);
    questions
}
