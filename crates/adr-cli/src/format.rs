//! Listing output: JSON, Table, and Markdown.

use adr_core::error::AdrError;
use adr_core::RecordSummary;

/// Output format for `adr list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
    Markdown,
}

const COLUMNS: [&str; 4] = ["ID", "Title", "Status", "Date"];

/// Format record summaries in the specified output format.
///
/// # Errors
///
/// Returns [`AdrError::Serialization`] if JSON encoding fails.
pub fn format_summaries(entries: &[RecordSummary], format: OutputFormat) -> Result<String, AdrError> {
    match format {
        OutputFormat::Json => format_json(entries),
        OutputFormat::Table => Ok(format_table(entries)),
        OutputFormat::Markdown => Ok(format_markdown(entries)),
    }
}

fn format_json(entries: &[RecordSummary]) -> Result<String, AdrError> {
    serde_json::to_string_pretty(entries).map_err(|e| AdrError::Serialization(e.to_string()))
}

fn cells(entry: &RecordSummary) -> [&str; 4] {
    [&entry.id, &entry.title, &entry.status, &entry.date]
}

fn format_table(entries: &[RecordSummary]) -> String {
    if entries.is_empty() {
        return "(no records)\n".to_string();
    }

    let mut widths = COLUMNS.map(str::len);
    for entry in entries {
        for (width, cell) in widths.iter_mut().zip(cells(entry)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();

    push_table_row(&mut output, COLUMNS, &widths);
    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&sep.join("-+-"));
    output.push('\n');

    for entry in entries {
        push_table_row(&mut output, cells(entry), &widths);
    }

    output
}

fn push_table_row(output: &mut String, cells: [&str; 4], widths: &[usize; 4]) {
    let vals: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:width$}"))
        .collect();
    output.push_str(vals.join(" | ").trim_end());
    output.push('\n');
}

fn format_markdown(entries: &[RecordSummary]) -> String {
    if entries.is_empty() {
        return "*No records*\n".to_string();
    }

    let mut output = String::new();

    output.push_str("| ");
    output.push_str(&COLUMNS.join(" | "));
    output.push_str(" |\n");

    output.push_str("| ");
    output.push_str(&COLUMNS.map(|_| "---").join(" | "));
    output.push_str(" |\n");

    for entry in entries {
        let entry = entry.escaped_for_table();
        output.push_str("| ");
        output.push_str(&cells(&entry).join(" | "));
        output.push_str(" |\n");
    }

    output
}
