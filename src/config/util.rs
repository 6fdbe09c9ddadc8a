//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract path component from a URL string
///
/// Uses `url` crate for proper parsing, so ports, auth info, query
/// strings and fragments never leak into the path.
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://misaka.github.io/my-blog/") -> Some("my-blog")
/// extract_url_path("https://example.com")                -> Some("")
/// extract_url_path("invalid")                            -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    let path = parsed.path().trim_matches('/');
    Some(path.to_string())
}

/// Find config file by searching upward from current directory
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` until a directory containing `config_name` is found.
///
/// # Example
/// ```text
/// /home/user/blog/docs/posts/  ← start
/// /home/user/blog/sitemark.toml ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://misaka.github.io/my-blog/"),
            Some("my-blog".to_string())
        );
        assert_eq!(
            extract_url_path("https://example.github.io/a/b/c"),
            Some("a/b/c".to_string())
        );
        assert_eq!(extract_url_path("https://example.com"), Some(String::new()));
        assert_eq!(
            extract_url_path("https://example.com:8080/path?query=1#frag"),
            Some("path".to_string())
        );
        assert_eq!(extract_url_path("invalid-url"), None);
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("sitemark.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("sitemark.toml")).unwrap();
        assert_eq!(found, temp.path().join("sitemark.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file_from(temp.path(), Path::new("no-such-config.toml")).is_none());
    }
}
