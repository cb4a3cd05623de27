//! Ordered key/value record with indexed-key helpers.

use crate::prompt::{ConnectOption, ConnectQuestion};
use std::collections::HashMap;

/// Highest wrong-option index scanned when rebuilding connect questions.
const MAX_WRONG_OPTIONS: usize = 4;

/// String key to string value, in insertion order.
///
/// Re-inserting an existing key replaces its value in place, so later rows
/// of a file win while the original position is kept for writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRecord {
    rows: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.rows[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.rows.len());
                self.rows.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.rows[pos].1.as_str())
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Values of `prefix_1`, `prefix_2`, ... up to the first missing key.
    ///
    /// Empty values are kept; only an absent key ends the scan.
    pub fn extract_items(&self, prefix: &str) -> Vec<String> {
        (1..)
            .map_while(|i| self.get(&format!("{}_{}", prefix, i)))
            .map(str::to_string)
            .collect()
    }

    /// Non-empty values among `prefix_1..=max`, gaps allowed.
    pub fn non_empty_items(&self, prefix: &str, max: usize) -> Vec<String> {
        (1..=max)
            .filter_map(|i| self.get(&format!("{}_{}", prefix, i)))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Rebuild connect questions from their indexed keys.
    ///
    /// `connect_question_i` pairs with `connect_option_correct_i_1` and
    /// `connect_option_wrong_i_j` for `j = 1..=4`, each scan stopping at the
    /// first gap. Questions without any option are skipped.
    pub fn connect_questions(&self) -> Vec<ConnectQuestion> {
        let mut questions = Vec::new();

        for i in 1.. {
            let Some(question) = self.get(&format!("connect_question_{}", i)) else {
                break;
            };

            let mut options = Vec::new();
            if let Some(correct) = self.get(&format!("connect_option_correct_{}_1", i)) {
                options.push(ConnectOption::correct(correct));
            }
            for j in 1..=MAX_WRONG_OPTIONS {
                match self.get(&format!("connect_option_wrong_{}_{}", i, j)) {
                    Some(wrong) => options.push(ConnectOption::wrong(wrong)),
                    None => break,
                }
            }

            if options.is_empty() {
                log::debug!("skipping connect_question_{} without options", i);
                continue;
            }

            questions.push(ConnectQuestion {
                question: question.to_string(),
                options,
            });
        }

        questions
    }
}

#[cfg(test)]
impl FlatRecord {
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = FlatRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
