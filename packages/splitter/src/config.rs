//! Constants and marker recognition for the splitter.

use regex::bytes::Regex;
use std::sync::LazyLock;

use crate::types::Marker;

/// Fence that opens and closes every marker line.
pub const MARKER_FENCE: &str = "=====";

/// Directory identifiers are resolved against when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Marker pattern: fence, one space, identifier, one space, fence.
///
/// Leading whitespace is skipped: Unicode `White_Space` (UTF-8 encoded) plus
/// the information separators `\x1c`-`\x1f`.
/// Anchored at the start only; anything after the closing fence is ignored,
/// so trailing whitespace never matters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\x1c-\x1f]*===== ([a-zA-Z0-9._]+) =====").expect("valid regex")
});

/// Recognize a marker line.
///
/// Surrounding whitespace, Unicode included, is ignored when matching.
///
/// # Examples
/// ```
/// use segment_splitter::config::parse_marker;
///
/// let marker = parse_marker(b"===== a.txt =====\n").unwrap();
/// assert_eq!(marker.name, "a.txt");
/// assert!(parse_marker(b"===== my file.txt =====").is_none());
/// ```
pub fn parse_marker(line: &[u8]) -> Option<Marker> {
    let captures = MARKER_PATTERN.captures(line)?;
    let name = captures.get(1)?.as_bytes();
    // The character class is pure ASCII, so this never fails.
    let name = std::str::from_utf8(name).ok()?;
    Some(Marker {
        name: name.to_string(),
    })
}

/// Check whether `name` could appear as a marker identifier.
///
/// # Examples
/// ```
/// use segment_splitter::config::is_valid_identifier;
///
/// assert!(is_valid_identifier("notes_v1.2.md"));
/// assert!(!is_valid_identifier("dir/file.txt"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'_')
}

/// Render the marker line that opens a segment called `name`.
///
/// Produces the line without a terminator.
///
/// # Panics
/// Debug builds panic if `name` is not a valid identifier.
pub fn marker_line(name: &str) -> String {
    debug_assert!(
        is_valid_identifier(name),
        "marker name must match the identifier character class"
    );
    format!("{MARKER_FENCE} {name} {MARKER_FENCE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of(line: &str) -> Option<String> {
        parse_marker(line.as_bytes()).map(|m| m.name)
    }

    #[test]
    fn test_parse_marker_basic() {
        assert_eq!(name_of("===== a.txt ====="), Some("a.txt".to_string()));
        assert_eq!(name_of("===== A_b.9 =====\n"), Some("A_b.9".to_string()));
    }

    #[test]
    fn test_parse_marker_trims_surrounding_whitespace() {
        assert_eq!(name_of("   ===== a.txt =====  \r\n"), Some("a.txt".to_string()));
        assert_eq!(name_of("\t===== a.txt =====\t"), Some("a.txt".to_string()));
    }

    #[test]
    fn test_parse_marker_trims_control_whitespace() {
        assert_eq!(name_of("\x0b===== a.txt ====="), Some("a.txt".to_string()));
        assert_eq!(name_of("\x0c===== a.txt =====\n"), Some("a.txt".to_string()));
        assert_eq!(name_of("\x1c\x1f===== a.txt ====="), Some("a.txt".to_string()));
    }

    #[test]
    fn test_parse_marker_trims_unicode_whitespace() {
        assert_eq!(name_of("\u{a0}===== a.txt ====="), Some("a.txt".to_string()));
        assert_eq!(name_of("\u{85}===== a.txt ====="), Some("a.txt".to_string()));
        assert_eq!(name_of("\u{2028}===== a.txt ====="), Some("a.txt".to_string()));
        assert_eq!(
            name_of("\u{3000} \u{a0}===== a.txt ====="),
            Some("a.txt".to_string())
        );
    }

    #[test]
    fn test_parse_marker_ignores_trailing_unicode_whitespace() {
        assert_eq!(
            name_of("===== a.txt =====\u{2028}\u{a0}\n"),
            Some("a.txt".to_string())
        );
        assert_eq!(name_of("===== a.txt =====\x0b\r\n"), Some("a.txt".to_string()));
    }

    #[test]
    fn test_parse_marker_non_whitespace_prefix_blocks_match() {
        assert_eq!(name_of("\u{200b}===== a.txt ====="), None);
        assert_eq!(name_of("\x07===== a.txt ====="), None);
    }

    #[test]
    fn test_parse_marker_ignores_trailing_content() {
        assert_eq!(
            name_of("===== a.txt ===== trailing words"),
            Some("a.txt".to_string())
        );
        assert_eq!(name_of("===== a.txt ======"), Some("a.txt".to_string()));
    }

    #[test]
    fn test_parse_marker_rejects_bad_identifiers() {
        assert_eq!(name_of("===== my file.txt ====="), None);
        assert_eq!(name_of("=====  ====="), None);
        assert_eq!(name_of("===== dir/a.txt ====="), None);
        assert_eq!(name_of("===== a-b.txt ====="), None);
        assert_eq!(name_of("===== café.txt ====="), None);
    }

    #[test]
    fn test_parse_marker_rejects_wrong_fences() {
        assert_eq!(name_of("==== a.txt ===="), None);
        assert_eq!(name_of("=====a.txt====="), None);
        assert_eq!(name_of("=====  a.txt ====="), None);
        assert_eq!(name_of("x ===== a.txt ====="), None);
        assert_eq!(name_of("===== a.txt"), None);
        assert_eq!(name_of(""), None);
    }

    #[test]
    fn test_parse_marker_non_utf8_line() {
        assert!(parse_marker(b"\xff\xfe===== a.txt =====").is_none());
        assert_eq!(
            parse_marker(b"===== a.txt ===== \xff").map(|m| m.name),
            Some("a.txt".to_string())
        );
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("a"));
        assert!(is_valid_identifier(".hidden"));
        assert!(is_valid_identifier("README.md"));
        assert!(!is_valid_identifier("a b"));
        assert!(!is_valid_identifier("a/b"));
    }

    #[test]
    fn test_marker_line_parses_back() {
        let line = marker_line("report_2024.csv");
        assert_eq!(line, "===== report_2024.csv =====");
        assert_eq!(name_of(&line), Some("report_2024.csv".to_string()));
    }
}
