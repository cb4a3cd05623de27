//! Implementation of the `zapplet scenes` command.

use super::path_or;
use crate::cli::ScenesArgs;
use crate::config::Config;
use crate::error::{AppletError, Result};
use crate::fs::atomic_write_file;
use crate::genai::{Generated, TextGenerator, connect};
use crate::record::read_flat_record;
use crate::scene::{ProblemContext, SceneConfig, generate_scene_config};
use std::path::Path;

/// Execute the `zapplet scenes` command.
///
/// The scene description is printed to stdout unless `--output` is given.
pub fn cmd_scenes(config: &Config, args: ScenesArgs) -> Result<()> {
    let input = path_or(args.input, &config.record_path);
    let enhance = args.enhance || config.enhance_fallback_scenes;

    let client = connect(config, args.api_key.as_deref());
    let generator = client.as_ref().map(|c| c as &dyn TextGenerator);

    let scenes = scenes_for_record(&input, generator, enhance)?;
    if let Some(reason) = scenes.reason() {
        log::warn!("using fallback scene layout ({})", reason);
    }
    let json = scenes_json(scenes.value())?;

    match args.output {
        Some(path) => {
            atomic_write_file(&path, &json)?;
            println!(
                "Wrote {} scenes ({} shapes) to {}",
                scenes.value().scenes.len(),
                scenes.value().shape_count(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub(crate) fn scenes_for_record(
    input: &Path,
    generator: Option<&dyn TextGenerator>,
    enhance: bool,
) -> Result<Generated<SceneConfig>> {
    let record = read_flat_record(input)?;
    let context = ProblemContext::from_record(&record, generator);
    Ok(generate_scene_config(&context, generator, enhance))
}

fn scenes_json(config: &SceneConfig) -> Result<String> {
    serde_json::to_string_pretty(config)
        .map_err(|e| AppletError::Output(format!("failed to serialize scenes: {}", e)))
}
