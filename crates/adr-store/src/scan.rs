//! Directory scanning: one [`RecordSummary`] per record file.

use std::path::Path;

use tracing::{debug, warn};

use adr_core::naming::{has_record_extension, leading_number};
use adr_core::record::sort_summaries;
use adr_core::{RecordMeta, RecordSummary, Result};

use crate::reader::parse_record_file;

/// Summaries of every record file in `dir`, sorted by number.
///
/// Only `.md` files whose names start with a record number are considered;
/// `README.md`, `index.md` and the like are skipped. A file whose content
/// cannot be read, or carries no record number, yields a minimal summary
/// built from its name. Names that are not valid UTF-8 are read lossily,
/// the same way [`next_number`](crate::numbering::next_number) counts them.
///
/// # Errors
///
/// Returns [`AdrError::Io`](adr_core::AdrError::Io) if the directory cannot
/// be listed.
pub fn scan_dir(dir: &Path) -> Result<Vec<RecordSummary>> {
    let mut summaries = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !has_record_extension(&name) {
            continue;
        }
        let Some(file_number) = leading_number(&name) else {
            continue;
        };

        let summary = match parse_record_file(&entry.path()) {
            Ok(meta) => summarize(meta, file_number, &name),
            Err(err) => {
                warn!(file = %name, error = %err, "cannot read record, using file name only");
                RecordSummary::minimal(file_number, &name)
            }
        };
        debug!(file = %name, number = summary.number, "scanned record");
        summaries.push(summary);
    }

    sort_summaries(&mut summaries);
    Ok(summaries)
}

/// Reconcile extracted metadata with what the file name says.
///
/// Without a record number in the content nothing else extracted is
/// trusted either: the summary falls back to the file name alone.
fn summarize(mut meta: RecordMeta, file_number: u32, file: &str) -> RecordSummary {
    if meta.number == 0 {
        return RecordSummary::minimal(file_number, file);
    }
    if meta.title.is_empty() {
        meta.title = file.to_string();
    }
    RecordSummary::from_meta(meta, file)
}
