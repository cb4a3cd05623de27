//! Applet page content and its template variables.

use super::template::{Rendered, render_template, vars};
use crate::error::{AppletError, Result};
use crate::prompt::ConnectQuestion;
use crate::scene::SceneConfig;
use serde::Serialize;
use std::collections::HashMap;

/// Everything shown on one applet page.
#[derive(Debug, Clone, PartialEq)]
pub struct AppletPage {
    pub title: String,
    pub question_text: String,
    pub given: Vec<String>,
    pub tofind: Vec<String>,
    pub compute_steps: Vec<String>,
    pub check_steps: Vec<String>,
    pub connect_questions: Vec<ConnectQuestion>,
    pub scenes: SceneConfig,
}

/// Connect question as the page script reads it.
#[derive(Serialize)]
struct PageQuestion<'a> {
    question: &'a str,
    options: Vec<PageOption<'a>>,
}

/// The page script compares `correct` against the string `"true"`.
#[derive(Serialize)]
struct PageOption<'a> {
    text: &'a str,
    correct: &'static str,
}

impl AppletPage {
    /// Template variables for this page.
    ///
    /// Lists are embedded as JSON with apostrophes escaped and backslashes
    /// doubled, since the template places them inside single-quoted script
    /// string literals.
    pub fn variables(&self) -> Result<HashMap<String, String>> {
        let questions: Vec<PageQuestion> = self
            .connect_questions
            .iter()
            .map(|q| PageQuestion {
                question: &q.question,
                options: q
                    .options
                    .iter()
                    .map(|o| PageOption {
                        text: &o.text,
                        correct: if o.correct { "true" } else { "false" },
                    })
                    .collect(),
            })
            .collect();

        let scenes = serde_json::to_string_pretty(&self.scenes)
            .map_err(|e| AppletError::Output(format!("failed to encode scenes: {}", e)))?;

        Ok(vars([
            ("title", self.title.clone()),
            ("question_text", self.question_text.clone()),
            ("zdog_scenes_json", scenes),
            ("given_items", embedded_json(&self.given)?),
            ("tofind_items", embedded_json(&self.tofind)?),
            ("compute_steps", embedded_json(&self.compute_steps)?),
            ("check_steps", embedded_json(&self.check_steps)?),
            ("connect_questions", embedded_json(&questions)?),
        ]))
    }

    /// Render the page from `template`.
    ///
    /// `library_ref` occurrences (such as `js/zdog.dist.min.js`) are prefixed
    /// with `asset_prefix` before substitution. Unfilled placeholders are
    /// logged as warnings.
    pub fn render(&self, template: &str, library_ref: &str, asset_prefix: &str) -> Result<String> {
        let template = if asset_prefix.is_empty() || library_ref.is_empty() {
            template.to_string()
        } else {
            template.replace(library_ref, &format!("{}{}", asset_prefix, library_ref))
        };

        let Rendered { text, leftover } = render_template(&template, &self.variables()?);
        for name in &leftover {
            log::warn!("template placeholder {{{{{}}}}} has no value", name);
        }

        Ok(text)
    }
}

fn embedded_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)
        .map_err(|e| AppletError::Output(format!("failed to encode page data: {}", e)))?;
    Ok(json.replace('\'', "\\u0027").replace('\\', "\\\\"))
}
