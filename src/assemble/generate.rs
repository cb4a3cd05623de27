//! Field-by-field generation with fallbacks.

use super::{fallback, prompts};
use crate::genai::{
    GenerationError, Generated, TextGenerator, generate_or, non_numeric_lines, numbered_items,
    parse_json, step_lines, step_segments,
};
use crate::prompt::{ConnectQuestion, PromptRecord};
use crate::record::ContentRecord;

/// Build the complete content record for a parsed prompt.
///
/// `default_grade_level` is used when the prompt names none.
pub fn assemble_content(
    prompt: &PromptRecord,
    generator: Option<&dyn TextGenerator>,
    default_grade_level: &str,
) -> ContentRecord {
    let grade = if prompt.grade_level.is_empty() {
        default_grade_level
    } else {
        prompt.grade_level.as_str()
    };

    log::info!("generating title");
    let title = generate_title(generator, grade, &prompt.concept, &prompt.question);

    log::info!("generating compute steps");
    let compute_steps =
        generate_compute_steps(generator, grade, &prompt.question, &prompt.hints).into_value();

    log::info!("generating check steps");
    let check_steps = generate_check_steps(generator, grade, &prompt.question, &compute_steps);

    let connect_questions = if prompt.connect_questions.len() < fallback::CONNECT_QUESTION_COUNT {
        log::info!(
            "{} connect question(s) supplied; generating the rest",
            prompt.connect_questions.len()
        );
        let generated =
            generate_connect_questions(generator, grade, &prompt.question, &compute_steps);
        merge_connect_questions(&prompt.connect_questions, generated.into_value())
    } else {
        prompt.connect_questions.clone()
    };

    ContentRecord {
        title: title.into_value(),
        question_text: prompt.question.clone(),
        given: prompt.hints.clone(),
        tofind: prompt.objectives.clone(),
        compute_steps,
        check_steps: check_steps.into_value(),
        connect_questions,
        visualization_type: String::new(),
        visualization_params: String::new(),
    }
}

/// A short title ending in "Challenge".
pub fn generate_title(
    generator: Option<&dyn TextGenerator>,
    grade: &str,
    concept: &str,
    question: &str,
) -> Generated<String> {
    generate_or(
        generator,
        "title",
        |g| {
            let reply = g.complete(&prompts::title_request(grade, concept, question))?;
            let title = reply.trim().trim_matches(['"', '\'']).trim();
            if title.is_empty() {
                return Err(GenerationError::Malformed("empty title".to_string()));
            }
            if title.to_lowercase().contains("challenge") {
                Ok(title.to_string())
            } else {
                Ok(format!("{} Challenge", title))
            }
        },
        |reason| fallback::title(concept, question, reason),
    )
}

/// Ordered `Step N: ...` computation steps.
pub fn generate_compute_steps(
    generator: Option<&dyn TextGenerator>,
    grade: &str,
    question: &str,
    hints: &[String],
) -> Generated<Vec<String>> {
    generate_or(
        generator,
        "compute steps",
        |g| {
            let reply = g.complete(&prompts::compute_request(grade, question, hints))?;
            let mut steps = step_segments(&reply);
            if steps.is_empty() {
                steps = step_lines(&reply);
            }
            if steps.is_empty() {
                return Err(GenerationError::Malformed(
                    "no 'Step N:' lines in reply".to_string(),
                ));
            }
            Ok(steps)
        },
        |reason| fallback::compute_steps(hints, reason),
    )
}

/// Exactly five check steps.
pub fn generate_check_steps(
    generator: Option<&dyn TextGenerator>,
    grade: &str,
    question: &str,
    compute_steps: &[String],
) -> Generated<Vec<String>> {
    generate_or(
        generator,
        "check steps",
        |g| {
            let reply = g.complete(&prompts::check_request(grade, question, compute_steps))?;
            let mut steps = numbered_items(&reply);
            if steps.is_empty() {
                steps = non_numeric_lines(&reply);
            }
            Ok(fallback::pad_check_steps(steps))
        },
        |_| fallback::check_steps(),
    )
}

/// Exactly two multiple-choice connect questions.
pub fn generate_connect_questions(
    generator: Option<&dyn TextGenerator>,
    grade: &str,
    question: &str,
    compute_steps: &[String],
) -> Generated<Vec<ConnectQuestion>> {
    generate_or(
        generator,
        "connect questions",
        |g| {
            let reply = g.complete(&prompts::connect_request(grade, question, compute_steps))?;
            let questions: Vec<ConnectQuestion> = parse_json(&reply)?;
            Ok(fallback::pad_connect_questions(questions))
        },
        |_| fallback::connect_questions(),
    )
}

/// Supplied questions first, then generated ones until there are two.
pub fn merge_connect_questions(
    supplied: &[ConnectQuestion],
    generated: Vec<ConnectQuestion>,
) -> Vec<ConnectQuestion> {
    let missing = fallback::CONNECT_QUESTION_COUNT.saturating_sub(supplied.len());
    supplied
        .iter()
        .cloned()
        .chain(generated.into_iter().take(missing))
        .collect()
}
