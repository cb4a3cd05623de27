//! Prompt record types.

use serde::{Deserialize, Serialize};

/// One answer option of a connect question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectOption {
    pub text: String,
    pub correct: bool,
}

impl ConnectOption {
    pub fn correct(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            correct: true,
        }
    }

    pub fn wrong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            correct: false,
        }
    }
}

/// A supplementary multiple-choice conceptual question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectQuestion {
    pub question: String,
    pub options: Vec<ConnectOption>,
}

impl ConnectQuestion {
    /// The first option tagged correct, if any.
    pub fn first_correct(&self) -> Option<&ConnectOption> {
        self.options.iter().find(|o| o.correct)
    }

    /// Options tagged wrong, in order.
    pub fn wrong_options(&self) -> impl Iterator<Item = &ConnectOption> {
        self.options.iter().filter(|o| !o.correct)
    }
}

/// Normalized result of parsing a prompt file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptRecord {
    pub grade_level: String,
    pub concept: String,
    pub objectives: Vec<String>,
    pub question: String,
    pub hints: Vec<String>,
    pub connect_questions: Vec<ConnectQuestion>,
    pub notes: String,
}
