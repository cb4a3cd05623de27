//! CLI argument parsing for zapplet.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Zapplet: generate interactive 3D math applets from structured prompts.
///
/// The pipeline runs in stages, each its own subcommand:
/// - `prompt` turns a prompt file into a flat record CSV
/// - `build` renders a flat record into an applet directory
/// - `index` refreshes the listing page of a directory of applets
///
/// Without an API key every generated field falls back to a fixed default.
#[derive(Parser, Debug)]
#[command(name = "zapplet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./zapplet.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for zapplet.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a prompt file and write the flat record CSV.
    ///
    /// Title, solution steps, check steps and missing connect questions are
    /// generated by the text-generation service.
    Prompt(PromptArgs),

    /// Render a flat record into an applet directory.
    ///
    /// Clears the output directory, writes `index.html` and the rendering
    /// library, and records the directory-safe applet name.
    Build(BuildArgs),

    /// Print or write the scene description for a flat record.
    Scenes(ScenesArgs),

    /// Regenerate the listing page of a directory of applets.
    Index(IndexArgs),

    /// Write the ready-made "metal cubes" flat record.
    Sample(SampleArgs),
}

/// Arguments for the `prompt` command.
#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Prompt text file (default: config `prompt_path`).
    pub input: Option<PathBuf>,

    /// Flat record CSV to write (default: config `record_path`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// API key; overrides the configured environment variable.
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Flat record CSV (default: config `record_path`).
    pub input: Option<PathBuf>,

    /// Output directory (default: config `output_dir`).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// API key; overrides the configured environment variable.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Ask the service to enhance the fallback scene layout.
    #[arg(long)]
    pub enhance: bool,
}

/// Arguments for the `scenes` command.
#[derive(Parser, Debug)]
pub struct ScenesArgs {
    /// Flat record CSV (default: config `record_path`).
    pub input: Option<PathBuf>,

    /// JSON file to write; prints to stdout when absent.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// API key; overrides the configured environment variable.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Ask the service to enhance the fallback scene layout.
    #[arg(long)]
    pub enhance: bool,
}

/// Arguments for the `index` command.
#[derive(Parser, Debug)]
pub struct IndexArgs {
    /// Directory containing one subdirectory per applet.
    pub dir: PathBuf,

    /// Date stamp for the page (default: today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `sample` command.
#[derive(Parser, Debug)]
pub struct SampleArgs {
    /// Flat record CSV to write (default: config `record_path`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_prompt_defaults() {
        let cli = Cli::try_parse_from(["zapplet", "prompt"]).unwrap();
        if let Command::Prompt(args) = cli.command {
            assert!(args.input.is_none());
            assert!(args.output.is_none());
        } else {
            panic!("Expected Prompt command");
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_prompt_with_paths() {
        let cli = Cli::try_parse_from([
            "zapplet",
            "prompt",
            "my_prompt.txt",
            "-o",
            "out.csv",
            "--api-key",
            "sk-test",
        ])
        .unwrap();
        if let Command::Prompt(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("my_prompt.txt")));
            assert_eq!(args.output, Some(PathBuf::from("out.csv")));
            assert_eq!(args.api_key.as_deref(), Some("sk-test"));
        } else {
            panic!("Expected Prompt command");
        }
    }

    #[test]
    fn parse_build_with_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "zapplet",
            "build",
            "data.csv",
            "--output-dir",
            "site/applet",
            "--enhance",
            "--config",
            "custom.yaml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        if let Command::Build(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("data.csv")));
            assert_eq!(args.output_dir, Some(PathBuf::from("site/applet")));
            assert!(args.enhance);
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn parse_scenes_to_stdout() {
        let cli = Cli::try_parse_from(["zapplet", "scenes"]).unwrap();
        if let Command::Scenes(args) = cli.command {
            assert!(args.output.is_none());
            assert!(!args.enhance);
        } else {
            panic!("Expected Scenes command");
        }
    }

    #[test]
    fn parse_index_with_date() {
        let cli = Cli::try_parse_from(["zapplet", "index", "public", "--date", "2025-03-14"])
            .unwrap();
        if let Command::Index(args) = cli.command {
            assert_eq!(args.dir, PathBuf::from("public"));
            assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 3, 14));
        } else {
            panic!("Expected Index command");
        }
    }

    #[test]
    fn parse_index_requires_dir() {
        assert!(Cli::try_parse_from(["zapplet", "index"]).is_err());
    }

    #[test]
    fn parse_index_rejects_bad_date() {
        assert!(Cli::try_parse_from(["zapplet", "index", "public", "--date", "14/03/2025"]).is_err());
    }

    #[test]
    fn parse_sample() {
        let cli = Cli::try_parse_from(["zapplet", "sample", "--output", "x.csv"]).unwrap();
        assert!(matches!(cli.command, Command::Sample(args) if args.output == Some(PathBuf::from("x.csv"))));
    }
}
