//! Zapplet: generate interactive 3D math applets from structured prompt files.
//!
//! This is the main entry point for the `zapplet` CLI. It initialises
//! logging, parses arguments, dispatches to the appropriate command handler,
//! and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod applet;
pub mod assemble;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod genai;
pub mod index;
pub mod prompt;
pub mod record;
pub mod scene;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
