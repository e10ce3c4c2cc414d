//! Best-effort metadata extraction from record text.
//!
//! Extraction runs as a chain of fill-if-empty layers over a [`RecordMeta`]:
//!
//! 1. the structured header block ([`fill_from_header`]),
//! 2. legacy content lines: `# ADR N: Title`, status lines and `## Status`
//!    sections, `Date:` lines ([`fill_from_content`]).
//!
//! The file-level layers (modification time, file name) live with the
//! filesystem code that has access to them.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::frontmatter::{split_header_block, HeaderBlock};
use crate::record::RecordMeta;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#\s*ADR\s+(\d+)\s*:\s*(.+)$").expect("valid title regex"));
static STATUS_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^##\s*Status\s*$").expect("valid status heading regex"));
static STATUS_KV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:\*\*Status:\*\*|\*\*Status\*\*:|[-*]\s*Status:?|Status:)\s*(.+)$")
        .expect("valid status regex")
});
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[\s\-*#]*(?:\*\*)?Date\b.*?([0-9]{4}-[0-9]{2}-[0-9]{2})")
        .expect("valid date regex")
});

/// Extract everything the text itself can tell about a record.
///
/// Fields the text does not reveal stay empty (`number` stays `0`).
#[must_use]
pub fn extract_meta(content: &str) -> RecordMeta {
    let mut meta = RecordMeta::default();
    let body = fill_from_header(&mut meta, content);
    if meta.is_complete() {
        return meta;
    }
    fill_from_content(&mut meta, body);
    meta
}

/// Fill `meta` from a leading header block.
///
/// Returns the text content parsing should continue with: the remainder
/// after the block when it parsed, otherwise the whole input.
pub fn fill_from_header<'a>(meta: &mut RecordMeta, content: &'a str) -> &'a str {
    let Some((yaml, rest)) = split_header_block(content) else {
        return content;
    };
    match HeaderBlock::parse(yaml) {
        Ok(block) => {
            block.fill(meta);
            rest
        }
        Err(err) => {
            warn!(error = %err, "ignoring malformed header block");
            content
        }
    }
}

/// Fill missing fields of `meta` from legacy content lines.
pub fn fill_from_content(meta: &mut RecordMeta, content: &str) {
    let mut status = StatusScan::default();

    for line in content.lines() {
        if meta.number == 0 || meta.title.is_empty() {
            if let Some(caps) = TITLE_RE.captures(line) {
                if meta.number == 0 {
                    meta.number = caps[1].parse().unwrap_or(0);
                }
                if meta.title.is_empty() {
                    meta.title = caps[2].trim().to_string();
                }
                continue;
            }
        }

        if meta.status.is_empty() {
            if let Some(value) = status.feed(line) {
                meta.status = value;
            }
        }

        if meta.date.is_empty() {
            if let Some(date) = match_date_line(line) {
                meta.date = date;
            }
        }
    }
}

/// Date from a `Date: YYYY-MM-DD` style line.
#[must_use]
pub fn match_date_line(line: &str) -> Option<String> {
    DATE_RE.captures(line).map(|caps| caps[1].to_string())
}

/// Two-state scanner for the status of a record.
///
/// `Idle` accepts inline `Status: value` lines and arms on a `## Status`
/// heading; `Armed` takes the next non-blank line verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusScan {
    #[default]
    Idle,
    Armed,
}

impl StatusScan {
    /// Advance by one line, returning a status when this line yields one.
    pub fn feed(&mut self, line: &str) -> Option<String> {
        match *self {
            Self::Armed => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return None;
                }
                *self = Self::Idle;
                Some(trimmed.to_string())
            }
            Self::Idle => {
                if STATUS_HEADING_RE.is_match(line) {
                    *self = Self::Armed;
                    return None;
                }
                STATUS_KV_RE
                    .captures(line)
                    .map(|caps| caps[1].trim().to_string())
                    .filter(|value| !value.is_empty())
            }
        }
    }
}
