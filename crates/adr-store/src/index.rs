//! Rendering and writing the record index document.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use adr_core::error::AdrError;
use adr_core::{RecordSummary, Result};
use adr_template::index_template;

/// Display metadata for the index header.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    pub project_name: Option<String>,
    pub project_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct IndexContext<'a> {
    entries: Vec<IndexRow<'a>>,
    project_name: &'a str,
    #[serde(rename = "ProjectURL")]
    project_url: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct IndexRow<'a> {
    number: u32,
    #[serde(rename = "ID")]
    id: &'a str,
    title: String,
    status: String,
    date: String,
    file: &'a str,
}

impl<'a> IndexRow<'a> {
    fn new(entry: &'a RecordSummary) -> Self {
        let escaped = entry.escaped_for_table();
        Self {
            number: entry.number,
            id: &entry.id,
            title: escaped.title,
            status: escaped.status,
            date: escaped.date,
            file: &entry.file,
        }
    }
}

/// Render the index document for `entries`.
///
/// Entries are rendered in the order given; `|` in titles, statuses and
/// dates is escaped for the markdown table.
///
/// # Errors
///
/// Returns [`AdrError::Template`] if the index template fails to render.
pub fn render_index(entries: &[RecordSummary], options: &IndexOptions) -> Result<String> {
    let context = IndexContext {
        entries: entries.iter().map(IndexRow::new).collect(),
        project_name: options.project_name.as_deref().unwrap_or_default(),
        project_url: options.project_url.as_deref().unwrap_or_default(),
    };
    Ok(index_template().render(&context)?)
}

/// Render the index and write it to `out`, replacing any previous index.
///
/// # Errors
///
/// Returns [`AdrError::InvalidArgument`] for an empty output path,
/// [`AdrError::Template`] if rendering fails and [`AdrError::Io`] if the
/// file cannot be written.
pub fn write_index(
    out: &Path,
    entries: &[RecordSummary],
    options: &IndexOptions,
) -> Result<()> {
    if out.as_os_str().is_empty() {
        return Err(AdrError::InvalidArgument("empty index output path".to_string()));
    }
    let content = render_index(entries, options)?;
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, content)?;
    info!(path = %out.display(), entries = entries.len(), "wrote index");
    Ok(())
}
