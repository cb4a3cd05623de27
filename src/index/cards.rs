//! Applet discovery and card markup.

use crate::error::{AppletError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Directory holding the shared rendering library, never an applet.
const LIBRARY_DIR: &str = "js";

const DEFAULT_DESCRIPTION: &str = "Interactive mathematics visualization applet";

/// Descriptions longer than this are truncated.
const MAX_DESCRIPTION_CHARS: usize = 150;
const TRUNCATED_DESCRIPTION_CHARS: usize = 147;

static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("invalid case boundary regex"));

static META_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta\s+name=["']description["']\s+content=["'](.*?)["']"#)
        .expect("invalid meta description regex")
});

static QUESTION_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<p id="questionText">(.*?)</p>"#).expect("invalid question text regex")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("invalid tag regex"));

/// One applet directory found under the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppletEntry {
    /// Directory name, used for the link.
    pub name: String,
    pub title: String,
    pub description: String,
}

impl AppletEntry {
    /// Describe the applet in `dir`, reading its page for a description.
    pub fn from_dir(dir: &Path) -> Self {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let description = match fs::read_to_string(dir.join("index.html")) {
            Ok(html) => describe_page(&html),
            Err(e) => {
                log::warn!("could not read description for {}: {}", name, e);
                DEFAULT_DESCRIPTION.to_string()
            }
        };

        Self {
            title: title_from_dir_name(&name),
            name,
            description,
        }
    }

    /// Card markup linking to the applet.
    pub fn card_html(&self) -> String {
        format!(
            "\n    <div class=\"card\">\n        \
             <div class=\"card-content\">\n            \
             <h2 class=\"card-title\">{title}</h2>\n            \
             <p class=\"card-description\">{description}</p>\n        \
             </div>\n        \
             <a href=\"./{name}/\" class=\"card-button\">Open Applet</a>\n    \
             </div>\n    ",
            title = self.title,
            description = self.description,
            name = self.name,
        )
    }
}

/// Applet directories directly under `root`, sorted by name.
///
/// Hidden directories, the library directory and directories without an
/// `index.html` are skipped.
pub fn find_applets(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|e| AppletError::read("site directory", root, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AppletError::read("site directory", root, e))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if name == LIBRARY_DIR || name.starts_with('.') || !path.is_dir() {
            continue;
        }
        if path.join("index.html").is_file() {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// Readable title from a directory name: `MetalCubes_v2` becomes `Metal Cubes v2`.
pub fn title_from_dir_name(name: &str) -> String {
    CASE_BOUNDARY.replace_all(name, "$1 $2").replace('_', " ")
}

/// Card description for an applet page.
pub fn describe_page(html: &str) -> String {
    if let Some(caps) = META_DESCRIPTION.captures(html) {
        return caps[1].to_string();
    }

    if html.to_lowercase().contains("question")
        && let Some(caps) = QUESTION_TEXT.captures(html)
    {
        let text = TAG.replace_all(&caps[1], "").into_owned();
        if text.chars().count() > MAX_DESCRIPTION_CHARS {
            let truncated: String = text.chars().take(TRUNCATED_DESCRIPTION_CHARS).collect();
            return format!("{}...", truncated);
        }
        return text;
    }

    DEFAULT_DESCRIPTION.to_string()
}
