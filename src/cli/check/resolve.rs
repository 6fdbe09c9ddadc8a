//! Map site links to the markdown files that serve them.
//!
//! | link               | candidates                                      |
//! |--------------------|-------------------------------------------------|
//! | `/`                | `README.md`, `index.md`                         |
//! | `/guide/`          | `guide/README.md`, `guide/index.md`             |
//! | `/about`           | `about.md`, `about/README.md`, `about/index.md` |
//! | `/posts/a.md`      | `posts/a.md`                                    |
//! | `/posts/a.html`    | `posts/a.md`                                    |
//! | `/index.html`      | `index.md`, `README.md`                         |
//! | `/../secret.md`    | none, leaves the docs directory                 |

use crate::utils::path::{is_external_link, strip_fragment_and_query};
use std::path::{Path, PathBuf};

const DIR_PAGES: [&str; 2] = ["README.md", "index.md"];

/// Outcome of resolving one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Served by this file.
    Found(PathBuf),
    /// None of these files exist.
    Missing(Vec<PathBuf>),
    /// Climbs out of the docs directory with `..`.
    OutsideDocs,
    /// Points off-site, not checked.
    External,
}

/// Candidate files for `link` relative to the docs directory, in lookup order.
///
/// Returns `None` for external links and an empty list for links with
/// `..` segments.
pub fn candidates(link: &str) -> Option<Vec<PathBuf>> {
    if is_external_link(link) {
        return None;
    }

    let path = strip_fragment_and_query(link).trim_start_matches('/');
    if path.split('/').any(|segment| segment == "..") {
        return Some(Vec::new());
    }

    if path.is_empty() || path.ends_with('/') {
        return Some(DIR_PAGES.iter().map(|page| Path::new(path).join(page)).collect());
    }
    if path.ends_with(".md") {
        return Some(vec![PathBuf::from(path)]);
    }
    if let Some(stem) = path.strip_suffix(".html") {
        let markdown = PathBuf::from(format!("{stem}.md"));
        let mut found = vec![markdown];
        if let Some(dir) = stem
            .strip_suffix("index")
            .filter(|dir| dir.is_empty() || dir.ends_with('/'))
        {
            found.push(Path::new(dir).join("README.md"));
        }
        return Some(found);
    }

    let mut found = vec![PathBuf::from(format!("{path}.md"))];
    found.extend(DIR_PAGES.iter().map(|page| Path::new(path).join(page)));
    Some(found)
}

/// The file `sitemark init` creates for `link`.
pub fn primary_document(link: &str) -> Option<PathBuf> {
    candidates(link)?.into_iter().next()
}

/// Resolve `link` against `docs`.
pub fn resolve(docs: &Path, link: &str) -> Resolution {
    let Some(candidates) = candidates(link) else {
        return Resolution::External;
    };
    if candidates.is_empty() {
        return Resolution::OutsideDocs;
    }
    match candidates.iter().find(|c| docs.join(c).is_file()) {
        Some(found) => Resolution::Found(found.clone()),
        None => Resolution::Missing(candidates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn paths(link: &str) -> Vec<String> {
        candidates(link)
            .unwrap()
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_candidates() {
        assert_eq!(paths("/"), ["README.md", "index.md"]);
        assert_eq!(paths("/guide/"), ["guide/README.md", "guide/index.md"]);
        assert_eq!(paths("/about"), ["about.md", "about/README.md", "about/index.md"]);
        assert_eq!(paths("/posts/a.md"), ["posts/a.md"]);
        assert_eq!(paths("/posts/a.md#intro"), ["posts/a.md"]);
        assert_eq!(paths("/posts/a.html"), ["posts/a.md"]);
        assert_eq!(paths("/index.html"), ["index.md", "README.md"]);
        assert_eq!(paths("/guide/index.html"), ["guide/index.md", "guide/README.md"]);
        assert_eq!(paths("/reindex.html"), ["reindex.md"]);
        assert!(candidates("https://github.com").is_none());
        assert_eq!(candidates("/../secret.md"), Some(Vec::new()));
        assert_eq!(candidates("/posts/../../etc/passwd"), Some(Vec::new()));
        assert_eq!(paths("/posts/..draft.md"), ["posts/..draft.md"]);
    }

    #[test]
    fn test_primary_document() {
        assert_eq!(primary_document("/"), Some(PathBuf::from("README.md")));
        assert_eq!(primary_document("/get-started"), Some(PathBuf::from("get-started.md")));
        assert_eq!(primary_document("mailto:misaka@example.com"), None);
        assert_eq!(primary_document("/../outside.md"), None);
    }

    #[test]
    fn test_resolve() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path();
        fs::create_dir_all(docs.join("about")).unwrap();
        fs::write(docs.join("about/index.md"), "# About").unwrap();
        fs::write(docs.join("README.md"), "# Home").unwrap();

        assert_eq!(resolve(docs, "/"), Resolution::Found("README.md".into()));
        assert_eq!(resolve(docs, "/about"), Resolution::Found("about/index.md".into()));
        assert_eq!(
            resolve(docs, "/posts/a.html"),
            Resolution::Missing(vec!["posts/a.md".into()])
        );
        assert_eq!(resolve(docs, "https://github.com"), Resolution::External);
    }

    #[test]
    fn test_resolve_never_leaves_docs() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(temp.path().join("secret.md"), "# Secret").unwrap();

        assert_eq!(resolve(&docs, "/../secret.md"), Resolution::OutsideDocs);
    }
}
