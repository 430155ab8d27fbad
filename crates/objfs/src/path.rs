//! Path rules for the bucket view.
//!
//! Paths are slash-separated object keys. A single trailing delimiter is
//! allowed and hints that the path names a directory marker. Validation
//! happens before any store round-trip.

use crate::error::Error;

/// The character the store uses to group keys into common prefixes.
pub const DELIMITER: char = '/';

/// [`DELIMITER`] as a string slice, for store calls that take `&str`.
pub const DELIMITER_STR: &str = "/";

/// Checks that `path` is a valid relative bucket path.
///
/// Rules: non-empty, not rooted (no leading delimiter, no `C:` style drive
/// marker), no backslashes, no empty segments, no `.` or `..` segments.
pub(crate) fn validate(path: &str) -> Result<(), Error> {
    let invalid = || Error::InvalidPath(path.to_owned());

    if path.is_empty() || path.starts_with(DELIMITER) || path.contains('\\') {
        return Err(invalid());
    }

    // A single trailing delimiter is the directory hint, not an empty segment.
    let trimmed = path.strip_suffix(DELIMITER).unwrap_or(path);
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let mut segments = trimmed.split(DELIMITER);

    let first = segments.next().unwrap_or_default();
    if is_drive_marker(first) {
        return Err(invalid());
    }
    validate_segment(first).ok_or_else(invalid)?;

    for segment in segments {
        validate_segment(segment).ok_or_else(invalid)?;
    }
    Ok(())
}

fn validate_segment(segment: &str) -> Option<()> {
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(())
}

fn is_drive_marker(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    matches!(bytes, [drive, b':'] if drive.is_ascii_alphabetic())
}

/// Normalizes a directory path into a listing prefix.
///
/// The empty path and `"/"` both mean the bucket root, which lists with an
/// empty prefix. Everything else gets a trailing delimiter appended if the
/// caller left it off.
pub(crate) fn normalize_dir(path: &str) -> String {
    if path.is_empty() || path == DELIMITER_STR {
        return String::new();
    }
    if path.ends_with(DELIMITER) {
        path.to_owned()
    } else {
        format!("{path}{DELIMITER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        for path in ["a", "a/b", "blog/index.png", "a/b/", "with space/x", "..a/b", "a.b/c."] {
            assert!(validate(path).is_ok(), "expected {path:?} to be valid");
        }
    }

    #[test]
    fn rejects_invalid_paths() {
        for path in ["", "/", "/a", "a//b", "a/./b", "a/../b", "..", "a/..", "C:/x", "c:", "a\\b"] {
            assert!(
                matches!(validate(path), Err(Error::InvalidPath(_))),
                "expected {path:?} to be invalid"
            );
        }
    }

    #[test]
    fn trailing_delimiter_is_a_hint_not_a_segment() {
        assert!(validate("a/b/").is_ok());
        assert!(validate("a/b//").is_err());
    }

    #[test]
    fn normalizes_root_to_empty_prefix() {
        assert_eq!(normalize_dir(""), "");
        assert_eq!(normalize_dir("/"), "");
    }

    #[test]
    fn normalizes_directories_with_trailing_delimiter() {
        assert_eq!(normalize_dir("blog"), "blog/");
        assert_eq!(normalize_dir("blog/"), "blog/");
        assert_eq!(normalize_dir("a/b"), "a/b/");
    }
}
