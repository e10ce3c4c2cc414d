//! Sequential numbering of new records.

use std::io::ErrorKind;
use std::path::Path;

use adr_core::naming::leading_number;

/// Shortest file name that can carry a numeric prefix worth counting.
const MIN_NUMBERED_NAME_LEN: usize = 4;

/// Next unused record number in `dir`: the highest leading number among its
/// files plus one.
///
/// A directory that does not exist counts as empty.
///
/// # Errors
///
/// Returns [`AdrError::Io`](adr_core::AdrError::Io) for any I/O failure other than a missing
/// directory.
pub fn next_number(dir: &Path) -> adr_core::Result<u32> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(1),
        Err(err) => return Err(err.into()),
    };

    let mut max = 0;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.len() < MIN_NUMBERED_NAME_LEN {
            continue;
        }
        if let Some(n) = leading_number(&name) {
            max = max.max(n);
        }
    }
    Ok(max + 1)
}
