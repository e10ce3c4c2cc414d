//! Metadata extraction for record files on disk.
//!
//! Adds the two file-level layers on top of [`adr_core::extract`]: the
//! modification date and a title derived from the file name.

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use adr_core::extract::extract_meta;
use adr_core::naming::title_from_file_name;
use adr_core::{RecordMeta, Result};

/// Parse a record file into its metadata.
///
/// `number` stays `0` when neither the header block nor a heading carries
/// it; the caller reconciles it with the file name.
///
/// # Errors
///
/// Returns [`AdrError::Io`](adr_core::AdrError::Io) if the file cannot be
/// read.
pub fn parse_record_file(path: &Path) -> Result<RecordMeta> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);

    let mut meta = extract_meta(&content);
    if meta.is_complete() {
        return Ok(meta);
    }

    fill_date_from_mtime(&mut meta, path);
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        fill_title_from_file_name(&mut meta, name);
    }
    Ok(meta)
}

/// Use the file's modification date when no date was found.
pub fn fill_date_from_mtime(meta: &mut RecordMeta, path: &Path) {
    if !meta.date.is_empty() {
        return;
    }
    if let Ok(modified) = std::fs::metadata(path).and_then(|m| m.modified()) {
        meta.date = format_date(modified);
    }
}

/// Derive the title from the file name when no title was found.
pub fn fill_title_from_file_name(meta: &mut RecordMeta, file_name: &str) {
    if meta.title.is_empty() {
        if let Some(title) = title_from_file_name(file_name) {
            meta.title = title;
        }
    }
}

/// `YYYY-MM-DD` in local time.
#[must_use]
pub fn format_date(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%Y-%m-%d").to_string()
}
