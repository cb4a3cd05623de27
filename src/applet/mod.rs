//! Applet rendering: template substitution, page data and output files.

mod build;
mod page;
mod template;


pub use build::{PAGE_FILE, applet_dir_name, page_from_record, write_applet};
pub use page::AppletPage;
