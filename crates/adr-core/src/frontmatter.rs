//! Structured header block (YAML frontmatter) of a record.
//!
//! The block must start at byte 0 and is closed by the first `\n---\n`:
//! ```markdown
//! ---
//! id: 0001
//! title: "Use PostgreSQL Database"
//! status: "Proposed"
//! date: "2025-01-15"
//! ---
//!
//! # ADR 0001: Use PostgreSQL Database
//! ```

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::AdrError;
use crate::naming::parse_leading_digits;
use crate::record::RecordMeta;

const OPEN: &str = "---\n";
const CLOSE: &str = "\n---\n";

/// Split a document into its header block and the text after it.
///
/// Returns `None` when the document does not open with `---\n` or the
/// closing `\n---\n` is missing.
#[must_use]
pub fn split_header_block(content: &str) -> Option<(&str, &str)> {
    let after_open = content.strip_prefix(OPEN)?;
    let close = after_open.find(CLOSE)?;
    Some((&after_open[..close], &after_open[close + CLOSE.len()..]))
}

/// The recognized keys of a header block. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeaderBlock {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
}

impl HeaderBlock {
    /// Parse the YAML between the delimiters.
    ///
    /// # Errors
    ///
    /// Returns [`AdrError::Parse`] if the YAML is malformed or not a mapping.
    pub fn parse(yaml: &str) -> Result<Self, AdrError> {
        serde_yaml::from_str(yaml).map_err(|e| AdrError::Parse(e.to_string()))
    }

    /// Record number from `id`: integer, decimal (truncated) or numeric string.
    #[must_use]
    pub fn number(&self) -> u32 {
        match &self.id {
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.is_finite() && *f >= 0.0 && *f <= f64::from(u32::MAX))
                        .map(|f| f as u32)
                })
                .unwrap_or(0),
            Some(Value::String(s)) => parse_leading_digits(s.trim()),
            _ => 0,
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        scalar_text(self.title.as_ref())
    }

    #[must_use]
    pub fn status(&self) -> String {
        scalar_text(self.status.as_ref())
    }

    #[must_use]
    pub fn date(&self) -> String {
        scalar_text(self.date.as_ref())
    }

    /// Copy the block's values into the still-empty fields of `meta`.
    pub fn fill(&self, meta: &mut RecordMeta) {
        if meta.number == 0 {
            meta.number = self.number();
        }
        fill_text(&mut meta.title, self.title());
        fill_text(&mut meta.status, self.status());
        fill_text(&mut meta.date, self.date());
    }
}

/// Encode `value` as a YAML scalar that reads back as the same string,
/// for writing header block values from templates.
///
/// # Errors
///
/// Returns [`AdrError::Serialization`] if the value cannot be encoded.
pub fn yaml_scalar(value: &str) -> Result<String, AdrError> {
    let encoded = serde_yaml::to_string(value).map_err(|e| AdrError::Serialization(e.to_string()))?;
    Ok(encoded.trim_end_matches('\n').to_string())
}

fn fill_text(slot: &mut String, value: String) {
    if slot.is_empty() {
        *slot = value;
    }
}

fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
