//! Implementation of the `zapplet prompt` command.
//!
//! Reads the prompt text, assembles the content record (generating what the
//! prompt leaves out) and writes it as a flat record CSV.

use super::path_or;
use crate::assemble::assemble_content;
use crate::cli::PromptArgs;
use crate::config::Config;
use crate::error::Result;
use crate::fs::read_text;
use crate::genai::{TextGenerator, connect};
use crate::prompt::parse_prompt;
use crate::record::write_flat_record;
use std::path::Path;

/// Execute the `zapplet prompt` command.
pub fn cmd_prompt(config: &Config, args: PromptArgs) -> Result<()> {
    let input = path_or(args.input, &config.prompt_path);
    let output = path_or(args.output, &config.record_path);

    let client = connect(config, args.api_key.as_deref());
    let generator = client.as_ref().map(|c| c as &dyn TextGenerator);

    let title = prompt_to_record(config, &input, &output, generator)?;
    println!("Wrote '{}' to {}", title, output.display());
    Ok(())
}

/// Turn the prompt file at `input` into a flat record at `output`.
///
/// Returns the record's title.
pub(crate) fn prompt_to_record(
    config: &Config,
    input: &Path,
    output: &Path,
    generator: Option<&dyn TextGenerator>,
) -> Result<String> {
    let text = read_text(input, "prompt file")?;
    let prompt = parse_prompt(&text);
    log::info!(
        "parsed prompt: {} hints, {} connect questions",
        prompt.hints.len(),
        prompt.connect_questions.len()
    );

    let content = assemble_content(&prompt, generator, &config.default_grade_level);
    write_flat_record(output, &content.to_flat())?;
    log::info!("wrote flat record to {}", output.display());

    Ok(content.title)
}
