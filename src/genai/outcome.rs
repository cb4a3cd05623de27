//! Generation outcomes.

use super::client::{GenerationError, TextGenerator};
use std::fmt;

/// Why a fallback value was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No credential, so the service was never called.
    NoCredential,
    /// The call failed or the service answered with an error.
    ServiceUnavailable,
    /// The reply could not be decoded.
    MalformedResponse,
    /// The reply decoded but lacked required structure.
    InvalidStructure,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FallbackReason::NoCredential => "no credential",
            FallbackReason::ServiceUnavailable => "service unavailable",
            FallbackReason::MalformedResponse => "malformed response",
            FallbackReason::InvalidStructure => "invalid structure",
        };
        f.write_str(text)
    }
}

impl From<&GenerationError> for FallbackReason {
    fn from(err: &GenerationError) -> Self {
        match err {
            GenerationError::Request(_) | GenerationError::Status { .. } => {
                FallbackReason::ServiceUnavailable
            }
            GenerationError::EmptyReply | GenerationError::Malformed(_) => {
                FallbackReason::MalformedResponse
            }
            GenerationError::InvalidStructure(_) => FallbackReason::InvalidStructure,
        }
    }
}

/// A value produced by the service, or a fallback standing in for it.
#[derive(Debug, Clone, PartialEq)]
pub enum Generated<T> {
    Fresh(T),
    Fallback { value: T, reason: FallbackReason },
}

#[cfg(test)]
impl<T> Generated<T> {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Generated::Fresh(_))
    }
}

impl<T> Generated<T> {
    pub fn value(&self) -> &T {
        match self {
            Generated::Fresh(value) | Generated::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Generated::Fresh(value) | Generated::Fallback { value, .. } => value,
        }
    }

    pub fn reason(&self) -> Option<FallbackReason> {
        match self {
            Generated::Fresh(_) => None,
            Generated::Fallback { reason, .. } => Some(*reason),
        }
    }
}

/// Run `attempt` against the generator, or use `fallback`.
///
/// `what` names the generated field in log messages. The fallback closure
/// receives the reason, since some fields pick a different default when no
/// credential is configured than when the call failed.
pub fn generate_or<T>(
    generator: Option<&dyn TextGenerator>,
    what: &str,
    attempt: impl FnOnce(&dyn TextGenerator) -> Result<T, GenerationError>,
    fallback: impl FnOnce(FallbackReason) -> T,
) -> Generated<T> {
    let Some(generator) = generator else {
        log::info!("no credential; using default {}", what);
        let reason = FallbackReason::NoCredential;
        return Generated::Fallback {
            value: fallback(reason),
            reason,
        };
    };

    match attempt(generator) {
        Ok(value) => Generated::Fresh(value),
        Err(err) => {
            log::warn!("failed to generate {}: {}; using fallback", what, err);
            let reason = FallbackReason::from(&err);
            Generated::Fallback {
                value: fallback(reason),
                reason,
            }
        }
    }
}
