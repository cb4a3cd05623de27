//! Implementation of the `zapplet sample` command.

use super::path_or;
use crate::cli::SampleArgs;
use crate::config::Config;
use crate::error::Result;
use crate::record::{sample_record, write_flat_record};

/// Execute the `zapplet sample` command.
pub fn cmd_sample(config: &Config, args: SampleArgs) -> Result<()> {
    let output = path_or(args.output, &config.record_path);
    write_flat_record(&output, &sample_record())?;
    println!("Wrote sample record to {}", output.display());
    Ok(())
}
