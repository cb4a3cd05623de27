//! Scene generation with a deterministic fallback.

use super::fallback::cubes_layout;
use super::model::SceneConfig;
use super::params::{
    CubeParams, VisualizationKind, VisualizationParams, extract_parameters,
    select_visualization_kind,
};
use super::prompts;
use super::validate::decode_scene_config;
use crate::genai::{
    FallbackReason, GenerationError, Generated, TextGenerator, generate_or, parse_json,
};
use crate::prompt::ConnectQuestion;
use crate::record::{ContentRecord, FlatRecord};
use serde::Deserialize;
use serde_json::Value;

/// Given/to-find slots read from a record before asking for spans.
const MAX_SPAN_SLOTS: usize = 9;

/// Everything about the problem that shapes its scenes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemContext {
    pub question: String,
    pub given: Vec<String>,
    pub tofind: Vec<String>,
    pub compute_steps: Vec<String>,
    pub connect_questions: Vec<ConnectQuestion>,
    pub final_answer: String,
    /// Parameters stored in the record, if any.
    pub explicit_params: Option<VisualizationParams>,
}

#[derive(Debug, Default, Deserialize)]
struct Spans {
    given: Vec<String>,
    tofind: Vec<String>,
}

impl ProblemContext {
    /// Collect the problem context from a flat record.
    ///
    /// When the record lacks given or to-find items and has question text,
    /// the generator is asked to extract them from the question.
    pub fn from_record(record: &FlatRecord, generator: Option<&dyn TextGenerator>) -> Self {
        let question = record.get("question_text").unwrap_or_default().to_string();
        let mut given = record.non_empty_items("given", MAX_SPAN_SLOTS);
        let mut tofind = record.non_empty_items("tofind", MAX_SPAN_SLOTS);

        if !question.is_empty() && (given.is_empty() || tofind.is_empty()) {
            let spans = extract_spans(generator, &question).into_value();
            if given.is_empty() {
                given = spans.given;
            }
            if tofind.is_empty() {
                tofind = spans.tofind;
            }
        }
        if given.is_empty() {
            given = contiguous_non_empty(record, "given");
        }
        if tofind.is_empty() {
            tofind = contiguous_non_empty(record, "tofind");
        }

        let content = ContentRecord::from_flat(record);
        let final_answer = content.final_answer().to_string();
        let compute_steps: Vec<String> = content
            .compute_steps
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();

        let explicit_params = VisualizationParams::from_record(
            record.get("visualization_type").unwrap_or_default(),
            record.get("visualization_params").unwrap_or_default(),
        );

        Self {
            question,
            given,
            tofind,
            compute_steps,
            connect_questions: record.connect_questions(),
            final_answer,
            explicit_params,
        }
    }

    /// Question followed by the given items, used for parameter extraction.
    pub fn problem_text(&self) -> String {
        format!("{} {}", self.question, self.given.join(", "))
    }
}

fn contiguous_non_empty(record: &FlatRecord, prefix: &str) -> Vec<String> {
    record
        .extract_items(prefix)
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect()
}

fn extract_spans(generator: Option<&dyn TextGenerator>, question: &str) -> Generated<Spans> {
    generate_or(
        generator,
        "given/to-find spans",
        |g| {
            let reply = g.complete(&prompts::spans_request(question))?;
            parse_json::<Spans>(&reply)
        },
        |_| Spans::default(),
    )
}

/// Produce the scene description for a problem.
///
/// Parameters come from the record or are extracted from the problem text.
/// A generated description that fails validation is replaced by the cube
/// layout; with `enhance` set, the generator then gets one chance to
/// improve that layout.
pub fn generate_scene_config(
    context: &ProblemContext,
    generator: Option<&dyn TextGenerator>,
    enhance: bool,
) -> Generated<SceneConfig> {
    let problem_text = context.problem_text();
    let params = match &context.explicit_params {
        Some(params) => {
            log::info!("using visualization parameters from the record");
            params.clone()
        }
        None => extract_parameters(generator, &problem_text).into_value(),
    };

    let kind = select_visualization_kind(&params.visualization_type, &problem_text);
    log::info!("selected visualization kind: {}", kind);

    let generated = generate_or(
        generator,
        "scene description",
        |g| {
            let reply = g.complete(&prompts::scene_request(context, &params, kind))?;
            decode_scene_config(parse_json::<Value>(&reply)?)
        },
        |_| {
            if !matches!(
                kind,
                VisualizationKind::CubesToLargerCube | VisualizationKind::StackedCubes
            ) {
                log::debug!("no dedicated layout for {}; using the cubes layout", kind);
            }
            cubes_layout(&CubeParams::from_parameters(&params.parameters))
        },
    );

    match generated {
        Generated::Fallback { value, reason } if enhance => {
            let value = match generator {
                Some(g) => enhance_layout(g, context, &params, value),
                None => value,
            };
            Generated::Fallback { value, reason }
        }
        other => other,
    }
}

/// Ask the generator to refine a fallback layout.
///
/// The reply is kept only when it decodes and has as many scenes as the
/// layout it replaces.
fn enhance_layout(
    generator: &dyn TextGenerator,
    context: &ProblemContext,
    params: &VisualizationParams,
    layout: SceneConfig,
) -> SceneConfig {
    let template_json = match serde_json::to_string_pretty(&layout) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("failed to encode layout for enhancement: {}", e);
            return layout;
        }
    };

    let attempt = || -> Result<SceneConfig, GenerationError> {
        let reply =
            generator.complete(&prompts::enhance_request(context, params, &template_json))?;
        let enhanced = decode_scene_config(parse_json::<Value>(&reply)?)?;
        if enhanced.scenes.len() != layout.scenes.len() {
            return Err(GenerationError::InvalidStructure(format!(
                "expected {} scenes, got {}",
                layout.scenes.len(),
                enhanced.scenes.len()
            )));
        }
        Ok(enhanced)
    };

    match attempt() {
        Ok(enhanced) => {
            log::info!("enhanced fallback scene layout");
            enhanced
        }
        Err(e) => {
            log::warn!(
                "discarding enhanced layout ({}): {}",
                FallbackReason::from(&e),
                e
            );
            layout
        }
    }
}

