//! File naming rules for record files.
//!
//! Records are stored as `NNNN-slug.md`: a decimal number zero-padded to at
//! least four digits, a dash, and a filename-safe slug of the title.

/// File extension of record documents, without the dot.
pub const RECORD_EXTENSION: &str = "md";

/// Maximum number of leading digits considered when reading a file name.
const MAX_PREFIX_DIGITS: usize = 6;

/// Parse the leading run of ASCII digits (at most six) of a file name.
///
/// Returns `None` when the name has no leading digits or the digits
/// evaluate to zero.
#[must_use]
pub fn leading_number(name: &str) -> Option<u32> {
    let n = name
        .bytes()
        .take(MAX_PREFIX_DIGITS)
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    (n != 0).then_some(n)
}

/// Parse the leading digits of a string with no length limit.
///
/// Returns `0` when there are no leading digits or the value overflows.
#[must_use]
pub fn parse_leading_digits(s: &str) -> u32 {
    s.bytes()
        .take_while(u8::is_ascii_digit)
        .try_fold(0u32, |acc, b| {
            acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
        })
        .unwrap_or(0)
}

/// Zero-padded display identifier, at least four digits wide.
#[must_use]
pub fn format_record_id(number: u32) -> String {
    format!("{number:04}")
}

/// Filename-safe slug of a title.
///
/// Lowercases, maps spaces, `/` and `_` to `-`, then drops every character
/// outside `[a-z0-9-]`.
#[must_use]
pub fn slugify(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '_' => '-',
            other => other,
        })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// File name for a new record: `NNNN-slug.md`.
#[must_use]
pub fn record_file_name(number: u32, title: &str) -> String {
    format!(
        "{}-{}.{RECORD_EXTENSION}",
        format_record_id(number),
        slugify(title)
    )
}

/// Whether a file name carries the record document extension.
#[must_use]
pub fn has_record_extension(name: &str) -> bool {
    name.strip_suffix(RECORD_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Derive a title from a file name.
///
/// `0007-use-event-sourcing.md` becomes `use event sourcing`. Names without
/// a `-` yield `None`.
#[must_use]
pub fn title_from_file_name(name: &str) -> Option<String> {
    let stem = match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    };
    let (_, rest) = stem.split_once('-')?;
    Some(rest.replace('-', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn leading_number_reads_prefix_digits() {
        assert_eq!(leading_number("0001-first.md"), Some(1));
        assert_eq!(leading_number("0042-answer.md"), Some(42));
        assert_eq!(leading_number("12345-big.md"), Some(12345));
    }

    #[test]
    fn leading_number_stops_after_six_digits() {
        assert_eq!(leading_number("1234567-long.md"), Some(123_456));
    }

    #[test]
    fn leading_number_rejects_missing_or_zero_prefix() {
        assert_eq!(leading_number("readme.md"), None);
        assert_eq!(leading_number("index.md"), None);
        assert_eq!(leading_number("0000-draft.md"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn parse_leading_digits_handles_padding_and_garbage() {
        assert_eq!(parse_leading_digits("0001"), 1);
        assert_eq!(parse_leading_digits("17abc"), 17);
        assert_eq!(parse_leading_digits("abc"), 0);
        assert_eq!(parse_leading_digits("99999999999999"), 0);
    }

    #[test]
    fn record_id_is_padded_to_four_digits() {
        assert_eq!(format_record_id(1), "0001");
        assert_eq!(format_record_id(9999), "9999");
        assert_eq!(format_record_id(10_000), "10000");
    }

    #[test]
    fn slugify_maps_separators_and_strips_the_rest() {
        assert_eq!(slugify("Use PostgreSQL Database"), "use-postgresql-database");
        assert_eq!(slugify("  Client/Server_split  "), "client-server-split");
        assert_eq!(slugify("Use C++ & Rust!"), "use-c--rust");
        assert_eq!(slugify("Café résumé"), "caf-rsum");
    }

    #[test]
    fn record_file_name_matches_convention() {
        assert_eq!(
            record_file_name(1, "Use PostgreSQL Database"),
            "0001-use-postgresql-database.md"
        );
        assert_eq!(record_file_name(12_000, "Big"), "12000-big.md");
    }

    #[test]
    fn record_extension_check() {
        assert!(has_record_extension("0001-first.md"));
        assert!(!has_record_extension("0001-first.markdown"));
        assert!(!has_record_extension("0001-firstmd"));
        assert!(!has_record_extension("md"));
    }

    #[test]
    fn title_from_file_name_replaces_dashes() {
        assert_eq!(
            title_from_file_name("1234-this-is-a-test.md").as_deref(),
            Some("this is a test")
        );
        assert_eq!(title_from_file_name("notes.md"), None);
        assert_eq!(title_from_file_name("0005-x").as_deref(), Some("x"));
    }

    proptest! {
        #[test]
        fn slug_only_contains_safe_characters(title in ".{0,64}") {
            let slug = slugify(&title);
            prop_assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn file_name_number_reads_back(n in 1u32..=999_999) {
            let name = record_file_name(n, "some title");
            prop_assert_eq!(leading_number(&name), Some(n));
        }
    }
}
