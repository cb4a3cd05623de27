//! Site index: a listing page with one card per generated applet.

mod cards;
mod page;

#[cfg(test)]
mod tests;

pub use page::{INDEX_FILE, IndexUpdate, update_index};
