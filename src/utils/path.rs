//! Path and link utilities.
//!
//! Pure functions for path manipulation. No side effects except
//! [`normalize_path`], which consults the filesystem.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.txt"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Drop `#fragment` and `?query` from a site link.
///
/// `/posts/a.md#intro` -> `/posts/a.md`
#[inline]
pub fn strip_fragment_and_query(link: &str) -> &str {
    let end = link.find(['#', '?']).unwrap_or(link.len());
    &link[..end]
}

/// Display label for a bare document path: its file stem.
///
/// `/posts/archive1.md` -> `archive1`, `/guide/` -> `guide`, `/` -> `/`
pub fn label_from_path(path: &str) -> String {
    let trimmed = strip_fragment_and_query(path).trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or_default();
    let stem = Path::new(last)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(last);

    if stem.is_empty() {
        path.to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(is_external_link("tel:+1234567890"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
    }

    #[test]
    fn test_strip_fragment_and_query() {
        assert_eq!(strip_fragment_and_query("/posts/a.md#intro"), "/posts/a.md");
        assert_eq!(strip_fragment_and_query("/search?q=1"), "/search");
        assert_eq!(strip_fragment_and_query("/about"), "/about");
    }

    #[test]
    fn test_label_from_path() {
        assert_eq!(label_from_path("/posts/archive1.md"), "archive1");
        assert_eq!(label_from_path("/get-started"), "get-started");
        assert_eq!(label_from_path("/guide/"), "guide");
        assert_eq!(label_from_path("/posts/a.md#intro"), "a");
        assert_eq!(label_from_path("/"), "/");
        assert_eq!(label_from_path(""), "");
    }
}
