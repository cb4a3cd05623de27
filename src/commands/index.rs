//! Implementation of the `zapplet index` command.

use crate::cli::IndexArgs;
use crate::error::Result;
use crate::index::update_index;

/// Execute the `zapplet index` command.
pub fn cmd_index(args: IndexArgs) -> Result<()> {
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let update = update_index(&args.dir, date)?;
    let verb = if update.created { "Created" } else { "Updated" };
    println!(
        "{} index at {} with {} applets",
        verb,
        args.dir.display(),
        update.applets
    );
    Ok(())
}
