//! Filesystem utilities for zapplet.
//!
//! Generated files are written atomically so a crashed run never leaves a
//! half-written page or record behind; the output directory itself is cleared
//! and repopulated wholesale on every build.

pub mod atomic;
mod output;

pub use atomic::{atomic_write, atomic_write_file};
pub use output::{clear_directory, copy_asset, read_text};
