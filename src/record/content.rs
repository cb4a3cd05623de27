//! Typed content record and its flat encoding.

use super::flat::FlatRecord;
use crate::prompt::ConnectQuestion;

/// Number of `given_i` slots written.
pub const GIVEN_SLOTS: usize = 3;
/// Number of `tofind_i` slots written.
pub const TOFIND_SLOTS: usize = 3;
/// Number of `compute_step_i` slots written.
pub const COMPUTE_SLOTS: usize = 9;
/// Number of `check_step_i` slots written.
pub const CHECK_SLOTS: usize = 6;
/// Number of connect question blocks written.
pub const CONNECT_SLOTS: usize = 2;

/// Compute slots up to this index get a placeholder when empty.
const COMPUTE_PLACEHOLDER_SLOTS: usize = 6;
/// Check slots up to this index get a placeholder when empty.
const CHECK_PLACEHOLDER_SLOTS: usize = 5;
/// Wrong options written per connect question.
const WRONG_OPTION_SLOTS: usize = 3;

/// Leading rows of a generated record file.
const BANNER: [&str; 2] = [
    "ZDOG APPLET CSV GENERATOR",
    "Complete the fields below to generate an applet.",
];

/// Title used when a record has none.
pub const DEFAULT_TITLE: &str = "Interactive 3D Applet";

/// Applet content with named list fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRecord {
    pub title: String,
    pub question_text: String,
    pub given: Vec<String>,
    pub tofind: Vec<String>,
    pub compute_steps: Vec<String>,
    pub check_steps: Vec<String>,
    pub connect_questions: Vec<ConnectQuestion>,
    pub visualization_type: String,
    pub visualization_params: String,
}

impl ContentRecord {
    /// Encode into the fixed slot layout written by the `prompt` stage.
    pub fn to_flat(&self) -> FlatRecord {
        let mut flat = FlatRecord::new();

        for line in BANNER {
            flat.insert(line, "");
        }
        flat.insert("title", self.title.as_str());
        flat.insert("question_text", self.question_text.as_str());

        fill_slots(&mut flat, "given", &self.given, GIVEN_SLOTS, |_| None);
        fill_slots(&mut flat, "tofind", &self.tofind, TOFIND_SLOTS, |_| None);
        fill_slots(
            &mut flat,
            "compute_step",
            &self.compute_steps,
            COMPUTE_SLOTS,
            |i| {
                (i <= COMPUTE_PLACEHOLDER_SLOTS)
                    .then(|| format!("Step {}: Perform the required calculation for this step", i))
            },
        );
        fill_slots(&mut flat, "check_step", &self.check_steps, CHECK_SLOTS, |i| {
            (i <= CHECK_PLACEHOLDER_SLOTS)
                .then(|| format!("Check step {}: Verify your work by examining this aspect", i))
        });

        for i in 1..=CONNECT_SLOTS {
            match self.connect_questions.get(i - 1) {
                Some(question) => encode_connect_question(&mut flat, i, question),
                None => encode_default_connect_question(&mut flat, i),
            }
        }

        flat.insert("visualization_type", self.visualization_type.as_str());
        flat.insert("visualization_params", self.visualization_params.as_str());

        flat
    }

    /// Decode a flat record. Lists are read contiguously from index 1.
    pub fn from_flat(flat: &FlatRecord) -> Self {
        let text = |key: &str| flat.get(key).unwrap_or_default().to_string();

        Self {
            title: flat.get("title").unwrap_or(DEFAULT_TITLE).to_string(),
            question_text: text("question_text"),
            given: flat.extract_items("given"),
            tofind: flat.extract_items("tofind"),
            compute_steps: flat.extract_items("compute_step"),
            check_steps: flat.extract_items("check_step"),
            connect_questions: flat.connect_questions(),
            visualization_type: text("visualization_type"),
            visualization_params: text("visualization_params"),
        }
    }

    /// Last non-empty compute step, which usually states the answer.
    pub fn final_answer(&self) -> &str {
        self.compute_steps
            .iter()
            .rev()
            .find(|s| !s.trim().is_empty())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Write `prefix_1..=slots`, using `placeholder(i)` or an empty string for
/// slots past the end of `items`.
fn fill_slots(
    flat: &mut FlatRecord,
    prefix: &str,
    items: &[String],
    slots: usize,
    placeholder: impl Fn(usize) -> Option<String>,
) {
    for i in 1..=slots {
        let value = match items.get(i - 1) {
            Some(item) => item.clone(),
            None => placeholder(i).unwrap_or_default(),
        };
        flat.insert(format!("{}_{}", prefix, i), value);
    }
}

fn encode_connect_question(flat: &mut FlatRecord, i: usize, question: &ConnectQuestion) {
    flat.insert(format!("connect_question_{}", i), question.question.as_str());

    let mut correct_added = false;
    let mut wrong_count = 0;
    for option in &question.options {
        if option.correct && !correct_added {
            flat.insert(format!("connect_option_correct_{}_1", i), option.text.as_str());
            correct_added = true;
        } else if !option.correct && wrong_count < WRONG_OPTION_SLOTS {
            wrong_count += 1;
            flat.insert(
                format!("connect_option_wrong_{}_{}", i, wrong_count),
                option.text.as_str(),
            );
        }
    }

    if !correct_added {
        flat.insert(format!("connect_option_correct_{}_1", i), "The correct answer");
    }
    while wrong_count < WRONG_OPTION_SLOTS {
        wrong_count += 1;
        flat.insert(
            format!("connect_option_wrong_{}_{}", i, wrong_count),
            format!("Incorrect option {}", wrong_count),
        );
    }
}

fn encode_default_connect_question(flat: &mut FlatRecord, i: usize) {
    flat.insert(
        format!("connect_question_{}", i),
        format!("Question {}: What concept is being tested in this problem?", i),
    );
    flat.insert(
        format!("connect_option_correct_{}_1", i),
        "The correct concept for this problem",
    );
    flat.insert(
        format!("connect_option_wrong_{}_1", i),
        "An incorrect but related concept",
    );
    flat.insert(
        format!("connect_option_wrong_{}_2", i),
        "A different mathematical concept",
    );
    flat.insert(format!("connect_option_wrong_{}_3", i), "None of the above");
}
