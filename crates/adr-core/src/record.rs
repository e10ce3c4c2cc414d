//! Record metadata and summary types.

use serde::{Deserialize, Serialize};

use crate::naming::format_record_id;

/// Metadata recovered from a single record document.
///
/// Empty strings and a zero `number` mean "not found yet"; the extraction
/// layers only ever fill fields that are still empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    pub number: u32,
    pub title: String,
    pub status: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl RecordMeta {
    /// True once every field carries a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.number != 0 && !self.title.is_empty() && !self.status.is_empty() && !self.date.is_empty()
    }
}

/// One row of the record index: what a directory scan yields per file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub number: u32,
    /// Zero-padded display identifier (`0001`).
    pub id: String,
    pub title: String,
    pub status: String,
    pub date: String,
    /// Base file name the summary was derived from.
    pub file: String,
}

impl RecordSummary {
    /// Build a summary from extracted metadata and the file it came from.
    #[must_use]
    pub fn from_meta(meta: RecordMeta, file: impl Into<String>) -> Self {
        Self {
            number: meta.number,
            id: format_record_id(meta.number),
            title: meta.title,
            status: meta.status,
            date: meta.date,
            file: file.into(),
        }
    }

    /// Minimal summary used when a file's content could not be extracted.
    #[must_use]
    pub fn minimal(number: u32, file: &str) -> Self {
        Self {
            number,
            id: format_record_id(number),
            title: file.to_string(),
            status: String::new(),
            date: String::new(),
            file: file.to_string(),
        }
    }

    /// Copy with `|` escaped in the free-text columns.
    #[must_use]
    pub fn escaped_for_table(&self) -> Self {
        Self {
            title: escape_pipes(&self.title),
            status: escape_pipes(&self.status),
            date: escape_pipes(&self.date),
            ..self.clone()
        }
    }
}

/// Sort summaries ascending by number, keeping listing order for ties.
pub fn sort_summaries(summaries: &mut [RecordSummary]) {
    // `sort_by_key` is stable
    summaries.sort_by_key(|s| s.number);
}

/// Escape `|` so a value can sit inside a pipe-delimited markdown table.
#[must_use]
pub fn escape_pipes(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn summary(number: u32, file: &str) -> RecordSummary {
        RecordSummary::from_meta(
            RecordMeta {
                number,
                title: file.to_string(),
                ..RecordMeta::default()
            },
            file,
        )
    }

    #[test]
    fn completeness_requires_every_field() {
        let mut meta = RecordMeta {
            number: 1,
            title: "First".to_string(),
            status: "Accepted".to_string(),
            date: String::new(),
        };
        assert!(!meta.is_complete());
        meta.date = "2025-01-01".to_string();
        assert!(meta.is_complete());
        meta.number = 0;
        assert!(!meta.is_complete());
    }

    #[test]
    fn summary_carries_padded_id() {
        let s = summary(7, "0007-seven.md");
        assert_eq!(s.id, "0007");
        assert_eq!(s.file, "0007-seven.md");
    }

    #[test]
    fn minimal_summary_uses_file_name_as_title() {
        let s = RecordSummary::minimal(3, "0003-third-decision.md");
        assert_eq!(s.number, 3);
        assert_eq!(s.title, "0003-third-decision.md");
        assert!(s.status.is_empty());
        assert!(s.date.is_empty());
    }

    #[test]
    fn escape_for_table_only_touches_text_columns() {
        let s = RecordSummary {
            number: 1,
            id: "0001".to_string(),
            title: "A | B".to_string(),
            status: "Accepted|Final".to_string(),
            date: "2025-01-01".to_string(),
            file: "0001-a|b.md".to_string(),
        };
        let escaped = s.escaped_for_table();
        assert_eq!(escaped.title, "A \\| B");
        assert_eq!(escaped.status, "Accepted\\|Final");
        assert_eq!(escaped.file, "0001-a|b.md");
    }

    #[test]
    fn sort_keeps_listing_order_for_duplicates() {
        let mut list = vec![
            summary(5, "0005-b.md"),
            summary(2, "0002-a.md"),
            summary(5, "0005-a.md"),
            summary(1, "0001-a.md"),
        ];
        sort_summaries(&mut list);
        let files: Vec<&str> = list.iter().map(|s| s.file.as_str()).collect();
        assert_eq!(files, ["0001-a.md", "0002-a.md", "0005-b.md", "0005-a.md"]);
    }

    #[test]
    fn summary_serializes_to_json_object() {
        let json = serde_json::to_value(summary(1, "0001-first.md")).expect("serialize");
        assert_eq!(json["id"], "0001");
        assert_eq!(json["number"], 1);
        assert_eq!(json["file"], "0001-first.md");
    }

    proptest! {
        #[test]
        fn sorted_ascending_and_stable(numbers in proptest::collection::vec(1u32..20, 0..40)) {
            let mut list: Vec<RecordSummary> = numbers
                .iter()
                .enumerate()
                .map(|(pos, n)| summary(*n, &format!("{pos}")))
                .collect();
            sort_summaries(&mut list);
            for pair in list.windows(2) {
                prop_assert!(pair[0].number <= pair[1].number);
                if pair[0].number == pair[1].number {
                    let a: usize = pair[0].file.parse().unwrap();
                    let b: usize = pair[1].file.parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
