//! The flat content record persisted between the `prompt` and `build` stages.
//!
//! On disk the record is a two-column CSV of `key,value` rows. In memory it is
//! a [`FlatRecord`] (ordered keys, lookup by key), and everything above the
//! persistence boundary works with the typed [`ContentRecord`].

mod content;
mod csv_io;
mod flat;
mod sample;


pub use content::{
    CHECK_SLOTS, COMPUTE_SLOTS, CONNECT_SLOTS, ContentRecord, DEFAULT_TITLE, GIVEN_SLOTS,
    TOFIND_SLOTS,
};
pub use csv_io::{parse_flat_record, read_flat_record, render_flat_record, write_flat_record};
pub use flat::FlatRecord;
pub use sample::sample_record;
