//! Reading and writing the two-column record file.

use super::flat::FlatRecord;
use crate::error::{AppletError, Result};
use crate::fs::atomic_write;
use std::path::Path;

/// Read a record file.
///
/// Every row with at least two columns contributes `key -> value`; extra
/// columns are ignored and later duplicates win.
pub fn read_flat_record(path: &Path) -> Result<FlatRecord> {
    let bytes = std::fs::read(path).map_err(|e| AppletError::read("record file", path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| AppletError::Parse {
        what: format!("record file '{}'", path.display()),
        reason: e.to_string(),
    })?;
    parse_flat_record(&text)
}

/// Parse record CSV text.
pub fn parse_flat_record(text: &str) -> Result<FlatRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut record = FlatRecord::new();
    for row in reader.records() {
        let row = row.map_err(|e| AppletError::Parse {
            what: "record file".to_string(),
            reason: e.to_string(),
        })?;
        if let (Some(key), Some(value)) = (row.get(0), row.get(1)) {
            record.insert(key, value);
        }
    }

    Ok(record)
}

/// Render a record as CSV text.
pub fn render_flat_record(record: &FlatRecord) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (key, value) in record.rows() {
        writer
            .write_record([key, value])
            .map_err(|e| AppletError::Output(format!("failed to encode record row '{}': {}", key, e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppletError::Output(format!("failed to encode record: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppletError::Output(format!("failed to encode record: {}", e)))
}

/// Atomically write a record file.
pub fn write_flat_record(path: &Path, record: &FlatRecord) -> Result<()> {
    let text = render_flat_record(record)?;
    atomic_write(path, text.as_bytes())
}
