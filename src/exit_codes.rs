//! Exit code constants for the zapplet CLI.
//!
//! Every stage shares the same contract:
//! - 0: Success
//! - 1: Unrecoverable failure (unreadable input, unparseable record, write error)
//!
//! Failures of the text-generation service never reach this layer; they are
//! replaced by fallback values long before a command returns.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Unrecoverable I/O, configuration or parse failure.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(SUCCESS, FAILURE);
    }

    #[test]
    fn exit_codes_match_cli_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
