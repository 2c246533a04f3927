use std::path::Path;

use super::{IoError, Result};

pub(crate) fn extension(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase())
        .ok_or_else(|| IoError::UnsupportedFormat(path.to_string_lossy().to_string()))?;
    Ok(ext)
}

pub(crate) fn ensure_supported(path: &Path) -> Result<()> {
    let ext = extension(path)?;
    if super::supported_formats().contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(IoError::UnsupportedFormat(ext))
    }
}

/// Grid row of a record. The reader skips blank lines, so the line number is used
/// rather than the record count; a blank line still occupies its row.
pub(crate) fn record_row(record: &csv::StringRecord, fallback: usize) -> usize {
    record
        .position()
        .map(|position| position.line().saturating_sub(1) as usize)
        .unwrap_or(fallback)
}

/// Headerless, flexible reader: rows may differ in length.
pub(crate) fn csv_reader(content: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes())
}
