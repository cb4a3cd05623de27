//! Configuration model for zapplet.
//!
//! This module defines the Config struct that represents `zapplet.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.
//!
//! The service credential is deliberately absent from the file format; it is
//! resolved from the command line or the process environment by
//! [`resolve_api_key`].

mod model;
mod operations;


// Re-export public API
pub use model::{Config, DEFAULT_CONFIG_FILE};
pub use operations::resolve_api_key;
