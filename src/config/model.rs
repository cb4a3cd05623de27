//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "zapplet.yaml";

/// Configuration for the applet pipeline.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Text-generation service
    // =========================================================================
    /// Chat-completion model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible API (without the `/chat/completions` suffix).
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Grade level woven into prompts when the prompt file names none.
    #[serde(default = "default_grade_level")]
    pub default_grade_level: String,

    /// Ask the service to embellish the deterministic scene layout when it was used.
    #[serde(default)]
    pub enhance_fallback_scenes: bool,

    // =========================================================================
    // Paths
    // =========================================================================
    /// Prompt text file read by `zapplet prompt` when no input is given.
    #[serde(default = "default_prompt_path")]
    pub prompt_path: String,

    /// Flat record CSV written by `prompt` and read by `build`.
    #[serde(default = "default_record_path")]
    pub record_path: String,

    /// Directory the generated applet is written into (cleared on each build).
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// HTML template with `{{token}}` placeholders.
    #[serde(default = "default_template_path")]
    pub template_path: String,

    /// Rendering library copied next to the generated page.
    ///
    /// The library is not bundled: `build` fails with an input error until
    /// `zdog.dist.min.js` is placed here (or this path points at a copy).
    #[serde(default = "default_library_path")]
    pub library_path: String,

    /// Subdirectory of the output dir the library is copied into.
    #[serde(default = "default_library_dir")]
    pub library_dir: String,

    /// Prefix applied to the library reference inside the page.
    #[serde(default = "default_asset_prefix")]
    pub asset_prefix: String,

    /// File receiving the directory-safe applet name (empty disables).
    #[serde(default = "default_name_file")]
    pub name_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
            default_grade_level: default_grade_level(),
            enhance_fallback_scenes: false,
            prompt_path: default_prompt_path(),
            record_path: default_record_path(),
            output_dir: default_output_dir(),
            template_path: default_template_path(),
            library_path: default_library_path(),
            library_dir: default_library_dir(),
            asset_prefix: default_asset_prefix(),
            name_file: default_name_file(),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_model() -> String {
    "gpt-4o-2024-08-06".to_string()
}
pub(crate) fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}
pub(crate) fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}
pub(crate) fn default_grade_level() -> String {
    "5th grade".to_string()
}
pub(crate) fn default_prompt_path() -> String {
    "applet_prompt.txt".to_string()
}
pub(crate) fn default_record_path() -> String {
    "applet_data.csv".to_string()
}
pub(crate) fn default_output_dir() -> String {
    "generated-applet".to_string()
}
pub(crate) fn default_template_path() -> String {
    "templates/applet_template.html".to_string()
}
pub(crate) fn default_library_path() -> String {
    "js/zdog.dist.min.js".to_string()
}
pub(crate) fn default_library_dir() -> String {
    "js".to_string()
}
pub(crate) fn default_asset_prefix() -> String {
    "../".to_string()
}
pub(crate) fn default_name_file() -> String {
    "applet_name.txt".to_string()
}
