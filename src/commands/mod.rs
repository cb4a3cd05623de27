//! Command implementations for zapplet.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Configuration is resolved once here and handed to every
//! command.

mod build;
mod index;
mod prompt;
mod sample;
mod scenes;


use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The config file is
/// loaded and validated before any command runs.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Command::Prompt(args) => prompt::cmd_prompt(&config, args),
        Command::Build(args) => build::cmd_build(&config, args),
        Command::Scenes(args) => scenes::cmd_scenes(&config, args),
        Command::Index(args) => index::cmd_index(args),
        Command::Sample(args) => sample::cmd_sample(&config, args),
    }
}

/// Use an explicit path when given, else the configured one.
fn path_or(explicit: Option<std::path::PathBuf>, configured: &str) -> std::path::PathBuf {
    explicit.unwrap_or_else(|| std::path::PathBuf::from(configured))
}
