//! Tests for prompt parsing.

use super::parser::{parse_connect_questions, split_list};
use super::*;

const FULL_PROMPT: &str = "GRADE LEVEL: 5th grade
CONCEPT: Volume of cubes

LEARNING OBJECTIVES:
- Compute the volume of a cube
- Relate volumes before and after melting

QUESTION/PROMPT:
Five metal cubes with sides of 5 cm were melted
and cast into a bigger cube. Find its volume.

HINTS FOR SOLUTION:
- Volume of one cube is s^3
- Multiply by the number of cubes

CONNECT QUESTIONS:
1. What is the formula for the volume of a cube?
CORRECT: V = s^3
WRONG: V = s^2
WRONG: V = 6s^2
2. What stays the same when metal is melted?
CORRECT: The total volume
WRONG: The surface area

ADDITIONAL NOTES:
Use pink cubes.
";

#[test]
fn test_parses_every_section() {
    let record = parse_prompt(FULL_PROMPT);

    assert_eq!(record.grade_level, "5th grade");
    assert_eq!(record.concept, "Volume of cubes");
    assert_eq!(
        record.objectives,
        vec![
            "Compute the volume of a cube",
            "Relate volumes before and after melting"
        ]
    );
    assert_eq!(
        record.question,
        "Five metal cubes with sides of 5 cm were melted\nand cast into a bigger cube. Find its volume."
    );
    assert_eq!(
        record.hints,
        vec!["Volume of one cube is s^3", "Multiply by the number of cubes"]
    );
    assert_eq!(record.connect_questions.len(), 2);
    assert_eq!(record.notes, "Use pink cubes.");
}

#[test]
fn test_empty_input_yields_empty_record() {
    assert_eq!(parse_prompt(""), PromptRecord::default());
}

#[test]
fn test_missing_sections_are_empty_not_errors() {
    let record = parse_prompt("QUESTION/PROMPT:\nWhat is 2+2?\n\n");

    assert_eq!(record.question, "What is 2+2?");
    assert!(record.grade_level.is_empty());
    assert!(record.concept.is_empty());
    assert!(record.objectives.is_empty());
    assert!(record.hints.is_empty());
    assert!(record.connect_questions.is_empty());
    assert!(record.notes.is_empty());
}

#[test]
fn test_section_text_is_trimmed_and_stops_at_blank_line() {
    let record = parse_prompt("ADDITIONAL NOTES:   keep it short   \n\nnot part of notes");
    assert_eq!(record.notes, "keep it short");
}

#[test]
fn test_section_runs_to_end_of_input() {
    let record = parse_prompt("QUESTION/PROMPT:\nline one\nline two   ");
    assert_eq!(record.question, "line one\nline two");
}

#[test]
fn test_crlf_line_endings() {
    let record = parse_prompt("QUESTION/PROMPT:\r\nWhat is 3+3?\r\n\r\nHINTS FOR SOLUTION:\r\n- Add\r\n");
    assert_eq!(record.question, "What is 3+3?");
    assert_eq!(record.hints, vec!["Add"]);
}

#[test]
fn test_single_line_header_skips_to_next_line() {
    let record = parse_prompt("GRADE LEVEL:\n4th grade\nCONCEPT: Area\n");
    assert_eq!(record.grade_level, "4th grade");
    assert_eq!(record.concept, "Area");
}

// Odd edge case kept for compatibility: when a list section does not start
// with "-", its first line is taken verbatim as the first item and the rest
// of the first chunk is discarded.
#[test]
fn test_objectives_first_line_without_marker_is_first_item_verbatim() {
    let record = parse_prompt(
        "LEARNING OBJECTIVES:\nUnderstand volume\n- Compute cube volume\n- Compare volumes\n\n",
    );

    assert_eq!(
        record.objectives,
        vec![
            "Understand volume",
            "Compute cube volume",
            "Compare volumes"
        ]
    );
}

#[test]
fn test_unmarked_first_chunk_keeps_only_its_first_line() {
    let items = split_list("Intro line\ncontinued\n- Second");
    assert_eq!(items, vec!["Intro line", "Second"]);
}

#[test]
fn test_hints_without_any_marker() {
    let items = split_list("Just one hint");
    assert_eq!(items, vec!["Just one hint"]);
}

#[test]
fn test_list_items_are_trimmed() {
    let items = split_list("-   first  \n-  second\n-third");
    assert_eq!(items, vec!["first", "second", "third"]);
}

#[test]
fn test_later_list_items_keep_their_leading_characters() {
    let items = split_list("- Volume of one cube is s^3\n- Multiply by the number of cubes");
    assert_eq!(
        items,
        vec!["Volume of one cube is s^3", "Multiply by the number of cubes"]
    );
}

#[test]
fn test_first_connect_block_keeps_its_options() {
    let questions = parse_connect_questions(
        "1. First?\nCORRECT: a\nWRONG: b\n2. Second?\nCORRECT: c\n",
    );

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question, "First?");
    assert_eq!(
        questions[0].options,
        vec![ConnectOption::correct("a"), ConnectOption::wrong("b")]
    );
    assert_eq!(questions[1].options, vec![ConnectOption::correct("c")]);
}

#[test]
fn test_connect_options_are_classified_in_order() {
    let questions = parse_connect_questions(
        "1. Which formula?\nWRONG: V = s^2\nCORRECT: V = s^3\nWRONG: V = 6s^2\n",
    );

    assert_eq!(questions.len(), 1);
    let q = &questions[0];
    assert_eq!(q.question, "Which formula?");
    assert_eq!(
        q.options,
        vec![
            ConnectOption::wrong("V = s^2"),
            ConnectOption::correct("V = s^3"),
            ConnectOption::wrong("V = 6s^2"),
        ]
    );
}

#[test]
fn test_connect_untagged_lines_are_ignored() {
    let questions =
        parse_connect_questions("1. Question?\nsome commentary\nCORRECT: yes\nmaybe: no");
    assert_eq!(questions[0].options, vec![ConnectOption::correct("yes")]);
}

#[test]
fn test_connect_block_without_options_is_dropped() {
    let questions = parse_connect_questions(
        "1. Orphan question?\n2. Real question?\nCORRECT: yes\nWRONG: no",
    );

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question, "Real question?");
}

#[test]
fn test_connect_without_leading_number() {
    let questions = parse_connect_questions("Unnumbered?\nCORRECT: a\n2. Second?\nWRONG: b");
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question, "Unnumbered?");
    assert_eq!(questions[1].question, "Second?");
}

#[test]
fn test_connect_section_ends_at_blank_line() {
    let record = parse_prompt(
        "CONNECT QUESTIONS:\n1. First?\nCORRECT: a\n\n2. Second?\nCORRECT: b\n",
    );
    assert_eq!(record.connect_questions.len(), 1);
}

#[test]
fn test_first_correct_and_wrong_options() {
    let q = ConnectQuestion {
        question: "q".to_string(),
        options: vec![
            ConnectOption::wrong("w1"),
            ConnectOption::correct("c1"),
            ConnectOption::correct("c2"),
            ConnectOption::wrong("w2"),
        ],
    };

    assert_eq!(q.first_correct().unwrap().text, "c1");
    let wrong: Vec<&str> = q.wrong_options().map(|o| o.text.as_str()).collect();
    assert_eq!(wrong, vec!["w1", "w2"]);
}
