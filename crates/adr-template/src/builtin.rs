//! Built-in templates and template selection.
//!
//! Built-ins are compiled into the binary and parsed once, on first use. A
//! template identifier that is not a built-in name is treated as a path to a
//! template file.

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use adr_core::error::AdrError;

use crate::Template;

/// Identifier used when none is given.
pub const DEFAULT_RECORD_TEMPLATE: &str = "madr";

/// Built-in record templates by identifier.
pub const BUILTIN_RECORD_TEMPLATES: &[(&str, &str)] = &[
    ("madr", include_str!("../templates/madr.md")),
    ("nygard", include_str!("../templates/nygard.md")),
];

/// Template of the generated index document.
pub const INDEX_TEMPLATE: &str = include_str!("../templates/index.md");

/// Parsed built-in record templates, in [`BUILTIN_RECORD_TEMPLATES`] order.
static PARSED_RECORD_TEMPLATES: LazyLock<Vec<Template>> = LazyLock::new(|| {
    BUILTIN_RECORD_TEMPLATES
        .iter()
        .map(|(name, text)| {
            Template::parse(text)
                .unwrap_or_else(|e| panic!("built-in template {name} does not parse: {e}"))
        })
        .collect()
});

static PARSED_INDEX_TEMPLATE: LazyLock<Template> =
    LazyLock::new(|| Template::parse(INDEX_TEMPLATE).expect("valid index template"));

fn builtin_position(name: &str) -> Option<usize> {
    let name = name.trim();
    let name = if name.is_empty() {
        DEFAULT_RECORD_TEMPLATE
    } else {
        name
    };
    BUILTIN_RECORD_TEMPLATES
        .iter()
        .position(|(id, _)| id.eq_ignore_ascii_case(name))
}

/// Text of a built-in record template, matched case-insensitively.
#[must_use]
pub fn builtin_record_template(name: &str) -> Option<&'static str> {
    builtin_position(name).map(|i| BUILTIN_RECORD_TEMPLATES[i].1)
}

/// Resolve and parse a record template.
///
/// Built-ins are borrowed from the parsed set; template files are read and
/// parsed on every call.
///
/// # Errors
///
/// Returns [`AdrError::Io`] for unreadable template files and
/// [`AdrError::Template`] for templates that do not parse.
pub fn load_record_template(name: &str) -> Result<Cow<'static, Template>, AdrError> {
    if let Some(i) = builtin_position(name) {
        return Ok(Cow::Borrowed(&PARSED_RECORD_TEMPLATES[i]));
    }
    let text = std::fs::read_to_string(Path::new(name))?;
    Ok(Cow::Owned(Template::parse(&text)?))
}

/// The parsed index template.
#[must_use]
pub fn index_template() -> &'static Template {
    &PARSED_INDEX_TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_context() -> serde_json::Value {
        json!({
            "ID": "0001",
            "Title": "Use PostgreSQL Database",
            "Status": "Proposed",
            "Date": "2025-01-15",
            "TitleYAML": "Use PostgreSQL Database",
            "StatusYAML": "Proposed",
            "DateYAML": "2025-01-15",
        })
    }

    #[test]
    fn builtin_names_resolve() {
        assert!(builtin_record_template("madr").is_some());
        assert!(builtin_record_template("NYGARD").is_some());
        assert!(builtin_record_template(" madr ").is_some());
        assert_eq!(
            builtin_record_template(""),
            builtin_record_template("madr")
        );
        assert!(builtin_record_template("docs/custom.md").is_none());
    }

    #[test]
    fn every_builtin_parses_and_renders() {
        for (name, text) in BUILTIN_RECORD_TEMPLATES {
            let out = Template::parse(text)
                .unwrap_or_else(|e| panic!("{name} does not parse: {e}"))
                .render(&record_context())
                .unwrap_or_else(|e| panic!("{name} does not render: {e}"));
            assert!(out.starts_with("---\nid: 0001\n"), "{name}");
            assert!(out.contains("\ntitle: Use PostgreSQL Database\n"), "{name}");
            assert!(out.contains("\nstatus: Proposed\n"), "{name}");
            assert!(out.contains("\ndate: 2025-01-15\n"), "{name}");
            assert!(out.contains("# ADR 0001: Use PostgreSQL Database"), "{name}");
        }
    }

    #[test]
    fn madr_has_its_sections() {
        let out = load_record_template("madr")
            .unwrap()
            .render(&record_context())
            .unwrap();
        for section in [
            "Context and Problem Statement",
            "Decision Drivers",
            "Considered Options",
            "Decision Outcome",
            "Positive Consequences",
            "Negative Consequences",
            "- Status: Proposed",
            "- Date: 2025-01-15",
        ] {
            assert!(out.contains(section), "missing {section}");
        }
    }

    #[test]
    fn nygard_has_its_sections() {
        let out = load_record_template("nygard")
            .unwrap()
            .render(&record_context())
            .unwrap();
        for section in ["## Status", "## Date", "## Context", "## Decision", "## Consequences"] {
            assert!(out.contains(section), "missing {section}");
        }
    }

    #[test]
    fn builtins_are_parsed_once() {
        assert!(std::ptr::eq(index_template(), index_template()));
        let first = load_record_template("madr").unwrap();
        let second = load_record_template("MADR").unwrap();
        assert!(matches!(first, Cow::Borrowed(_)));
        assert!(std::ptr::eq(first.as_ref(), second.as_ref()));
    }

    #[test]
    fn custom_template_loads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.md");
        std::fs::write(&path, "# {{.Title}}\n\n**Status**: {{.Status}}\n").unwrap();
        let out = load_record_template(path.to_str().unwrap())
            .unwrap()
            .render(&record_context())
            .unwrap();
        assert_eq!(out, "# Use PostgreSQL Database\n\n**Status**: Proposed\n");
    }

    #[test]
    fn missing_template_file_is_io_error() {
        let err = load_record_template("/no/such/template.md").unwrap_err();
        assert!(matches!(err, AdrError::Io(_)));
    }

    #[test]
    fn broken_template_file_is_template_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.md");
        std::fs::write(&path, "# {{.Title\n").unwrap();
        let err = load_record_template(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AdrError::Template(_)));
    }

    #[test]
    fn index_template_renders_rows() {
        let out = index_template()
            .render(&json!({
                "ProjectName": "Payments",
                "ProjectURL": "https://example.com/payments",
                "Entries": [
                    {"ID": "0001", "File": "0001-a.md", "Title": "A", "Status": "Accepted", "Date": "2025-01-01"}
                ]
            }))
            .unwrap();
        assert!(out.starts_with("# Architecture Decision Records\n"));
        assert!(out.contains("[Payments](https://example.com/payments)"));
        assert!(out.contains("| [0001](0001-a.md) | A | Accepted | 2025-01-01 |\n"));
    }
}
