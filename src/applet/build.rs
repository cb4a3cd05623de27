//! Writing a rendered applet to disk.

use super::page::AppletPage;
use crate::config::Config;
use crate::error::Result;
use crate::fs::{atomic_write_file, copy_asset, read_text};
use crate::genai::TextGenerator;
use crate::record::{ContentRecord, FlatRecord};
use crate::scene::{ProblemContext, generate_scene_config};
use std::path::{Path, PathBuf};

/// Name of the generated page inside the output directory.
pub const PAGE_FILE: &str = "index.html";

/// Assemble the page for a flat record, generating its scenes.
///
/// Given and to-find items come from the problem context, which may have
/// extracted them from the question text. Empty step slots are dropped.
pub fn page_from_record(
    record: &FlatRecord,
    generator: Option<&dyn TextGenerator>,
    enhance_scenes: bool,
) -> AppletPage {
    let content = ContentRecord::from_flat(record);
    let context = ProblemContext::from_record(record, generator);

    let scenes = generate_scene_config(&context, generator, enhance_scenes);
    let shapes = scenes.value().shape_count();
    match scenes.reason() {
        None => log::info!("generated scene description with {} shapes", shapes),
        Some(reason) => log::info!("using fallback scene layout ({}, {} shapes)", reason, shapes),
    }

    let non_empty = |items: Vec<String>| -> Vec<String> {
        items.into_iter().filter(|s| !s.is_empty()).collect()
    };

    AppletPage {
        title: content.title,
        question_text: content.question_text,
        given: context.given,
        tofind: context.tofind,
        compute_steps: non_empty(content.compute_steps),
        check_steps: non_empty(content.check_steps),
        connect_questions: content.connect_questions,
        scenes: scenes.into_value(),
    }
}

/// Render `page` into `output_dir` and copy the rendering library next to it.
///
/// Returns the path of the written page.
pub fn write_applet(config: &Config, output_dir: &Path, page: &AppletPage) -> Result<PathBuf> {
    let template = read_text(Path::new(&config.template_path), "template")?;

    let library_name = config.library_file_name();
    let library_ref = format!("{}/{}", config.library_dir, library_name);
    let html = page.render(&template, &library_ref, &config.asset_prefix)?;

    let library_target = output_dir.join(&config.library_dir).join(&library_name);
    copy_asset(Path::new(&config.library_path), &library_target)?;
    log::info!("copied rendering library to {}", library_target.display());

    let page_path = output_dir.join(PAGE_FILE);
    atomic_write_file(&page_path, &html)?;
    Ok(page_path)
}

/// Directory-safe applet name derived from a title.
///
/// Non-word characters are removed; `Applet` is prefixed when nothing is
/// left or the result does not start with a letter.
pub fn applet_dir_name(title: &str) -> String {
    let sanitized: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    match sanitized.chars().next() {
        Some(c) if c.is_alphabetic() => sanitized,
        _ => format!("Applet{}", sanitized),
    }
}
