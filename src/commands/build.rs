//! Implementation of the `zapplet build` command.
//!
//! # What `zapplet build` does
//!
//! 1. Reads the flat record
//! 2. Generates the scene description (or falls back to the cube layout)
//! 3. Clears the output directory
//! 4. Writes `index.html` and copies the rendering library
//! 5. Writes the directory-safe applet name to the name file (if configured)

use super::path_or;
use crate::applet::{applet_dir_name, page_from_record, write_applet};
use crate::cli::BuildArgs;
use crate::config::Config;
use crate::error::Result;
use crate::fs::{atomic_write_file, clear_directory};
use crate::genai::{TextGenerator, connect};
use crate::record::read_flat_record;
use std::path::{Path, PathBuf};

/// Result of a successful build.
#[derive(Debug)]
pub(crate) struct BuildOutput {
    pub page: PathBuf,
    pub applet_name: String,
}

/// Execute the `zapplet build` command.
pub fn cmd_build(config: &Config, args: BuildArgs) -> Result<()> {
    let input = path_or(args.input, &config.record_path);
    let output_dir = path_or(args.output_dir, &config.output_dir);
    let enhance = args.enhance || config.enhance_fallback_scenes;

    let client = connect(config, args.api_key.as_deref());
    let generator = client.as_ref().map(|c| c as &dyn TextGenerator);

    let built = build_applet(config, &input, &output_dir, generator, enhance)?;
    println!("Built applet '{}' at {}", built.applet_name, built.page.display());
    Ok(())
}

pub(crate) fn build_applet(
    config: &Config,
    input: &Path,
    output_dir: &Path,
    generator: Option<&dyn TextGenerator>,
    enhance: bool,
) -> Result<BuildOutput> {
    let record = read_flat_record(input)?;
    let page = page_from_record(&record, generator, enhance);

    clear_directory(output_dir)?;
    let page_path = write_applet(config, output_dir, &page)?;
    log::info!("wrote {}", page_path.display());

    let applet_name = applet_dir_name(&page.title);
    if let Some(name_file) = config.name_file_path() {
        atomic_write_file(&name_file, &applet_name)?;
        log::info!("applet name '{}' written to {}", applet_name, name_file.display());
    }

    Ok(BuildOutput {
        page: page_path,
        applet_name,
    })
}
