//! Error types for the zapplet CLI.
//!
//! Uses thiserror for derive macros. Only unrecoverable conditions live here;
//! text-generation failures are modelled separately in [`crate::genai`] and are
//! always absorbed by a fallback.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for zapplet operations.
#[derive(Error, Debug)]
pub enum AppletError {
    /// A required input (prompt file, flat record, template, library) could not be read.
    #[error("{0}")]
    Input(String),

    /// A flat record or other structured input was present but malformed.
    #[error("failed to parse {what}: {reason}")]
    Parse { what: String, reason: String },

    /// Writing the generated output failed.
    #[error("{0}")]
    Output(String),

    /// Configuration was unreadable or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppletError {
    /// Returns the exit code for this error.
    ///
    /// Every unrecoverable failure exits with the same status.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppletError::Input(_)
            | AppletError::Parse { .. }
            | AppletError::Output(_)
            | AppletError::Config(_) => exit_codes::FAILURE,
        }
    }

    /// Build an `Input` error for a path that could not be read.
    pub fn read(what: &str, path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        AppletError::Input(format!(
            "failed to read {} '{}': {}",
            what,
            path.display(),
            err
        ))
    }

    /// Build an `Output` error for a path that could not be written.
    pub fn write(what: &str, path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        AppletError::Output(format!(
            "failed to write {} '{}': {}",
            what,
            path.display(),
            err
        ))
    }
}

/// Result type alias for zapplet operations.
pub type Result<T> = std::result::Result<T, AppletError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn all_errors_exit_with_failure() {
        let errors = [
            AppletError::Input("missing".to_string()),
            AppletError::Parse {
                what: "record".to_string(),
                reason: "bad row".to_string(),
            },
            AppletError::Output("disk full".to_string()),
            AppletError::Config("empty model".to_string()),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE);
        }
    }

    #[test]
    fn read_error_names_the_path() {
        let err = AppletError::read("prompt file", Path::new("applet_prompt.txt"), "not found");
        assert_eq!(
            err.to_string(),
            "failed to read prompt file 'applet_prompt.txt': not found"
        );
    }

    #[test]
    fn parse_error_is_descriptive() {
        let err = AppletError::Parse {
            what: "flat record".to_string(),
            reason: "unterminated quote".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse flat record: unterminated quote"
        );
    }
}
