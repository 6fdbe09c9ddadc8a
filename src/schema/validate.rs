//! Validation pass run before a `SiteConfig` is handed out.
//!
//! Every check reports into [`ConfigDiagnostics`] with the path of the
//! offending node, so all problems surface in one run.

use super::{HeadTag, NavEntry, SidebarGroup, ThemeOptions, head::HEAD_TAGS};
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_external_link;
use rustc_hash::FxHashSet;

/// Field paths of the config file layout.
pub mod fields {
    use crate::config::FieldPath;

    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const BASE: FieldPath = FieldPath::new("site.base");
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const LANG: FieldPath = FieldPath::new("site.lang");
    pub const HEAD: FieldPath = FieldPath::new("site.head");
    pub const LOGO: FieldPath = FieldPath::new("theme.logo");
    pub const NAVBAR: FieldPath = FieldPath::new("theme.navbar");
    pub const SIDEBAR: FieldPath = FieldPath::new("theme.sidebar");
    pub const SEARCH_MAX_SUGGESTIONS: FieldPath =
        FieldPath::new("theme.search_max_suggestions");
}

/// Levels the default theme navbar renders: dropdown, section, link.
pub const MAX_NAV_DEPTH: usize = 3;

pub fn validate_title(title: &str, diag: &mut ConfigDiagnostics) {
    if title.trim().is_empty() {
        diag.warn(fields::TITLE, "title is empty, browser tabs will show the page title only");
    }
}

pub fn validate_head(head: &[HeadTag], diag: &mut ConfigDiagnostics) {
    for (i, tag) in head.iter().enumerate() {
        if !tag.is_known_tag() {
            diag.error_with_hint(
                fields::HEAD.index(i).field("tag"),
                format!("`{}` is not a head tag", tag.tag()),
                format!("use one of: {}", HEAD_TAGS.join(", ")),
            );
        }
        if tag.is_void() && tag.content().is_some() {
            diag.error_with_hint(
                fields::HEAD.index(i).field("content"),
                format!("`{}` is a void element and cannot have content", tag.tag()),
                "move the text into `attrs` or drop `content`",
            );
        }
    }
}

pub fn validate_theme(theme: &ThemeOptions, diag: &mut ConfigDiagnostics) {
    if let Some(logo) = &theme.logo {
        validate_link(logo, fields::LOGO, diag);
    }
    if theme.search && theme.search_max_suggestions == 0 {
        diag.warn(
            fields::SEARCH_MAX_SUGGESTIONS,
            "search is enabled but will never show suggestions",
        );
    }
}

// ============================================================================
// navbar
// ============================================================================

pub fn validate_navbar(entries: &[NavEntry], diag: &mut ConfigDiagnostics) {
    for (i, entry) in entries.iter().enumerate() {
        validate_entry(entry, fields::NAVBAR.index(i), 1, diag);
    }
}

fn validate_entry(entry: &NavEntry, path: FieldPath, depth: usize, diag: &mut ConfigDiagnostics) {
    let label = entry.label();
    if label.trim().is_empty() {
        diag.error(path.field("text"), "label is empty");
    }

    match entry {
        NavEntry::Leaf { link, .. } => validate_link(link, path.field("link"), diag),
        NavEntry::Group { children, .. } => {
            if children.is_empty() {
                diag.error_with_hint(
                    path,
                    format!("group `{label}` has no children"),
                    "add entries under `children` or replace it with a `link`",
                );
                return;
            }
            if depth >= MAX_NAV_DEPTH {
                diag.error_with_hint(
                    path,
                    format!("group `{label}` is nested too deeply"),
                    format!("the navbar renders at most {MAX_NAV_DEPTH} levels, make its children links"),
                );
                return;
            }
            let children_path = path.field("children");
            for (i, child) in children.iter().enumerate() {
                validate_entry(child, children_path.index(i), depth + 1, diag);
            }
        }
    }
}

/// Links must be absolute site paths or carry a URL scheme.
fn validate_link(link: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if link.trim().is_empty() {
        diag.error(field, "link is empty");
    } else if !link.starts_with('/') && !is_external_link(link) {
        diag.error_with_hint(
            field,
            format!("link `{link}` is neither an absolute site path nor an external URL"),
            format!("use \"/{link}\""),
        );
    }
}

// ============================================================================
// sidebar
// ============================================================================

pub fn validate_sidebar(sections: &[(String, Vec<SidebarGroup>)], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();

    for (prefix, groups) in sections {
        let path = fields::SIDEBAR.key(prefix);

        if !seen.insert(prefix.as_str()) {
            diag.error(path.clone(), format!("duplicate sidebar prefix `{prefix}`"));
        }
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            diag.error_with_hint(
                path.clone(),
                format!("route prefix `{prefix}` must start and end with `/`"),
                format!("use \"/{}/\"", prefix.trim_matches('/')),
            );
        }
        if groups.is_empty() {
            diag.warn(path.clone(), "prefix has no sidebar groups");
        }

        for (i, group) in groups.iter().enumerate() {
            validate_group(group, path.index(i), diag);
        }
    }
}

fn validate_group(group: &SidebarGroup, path: FieldPath, diag: &mut ConfigDiagnostics) {
    let heading = group.heading();
    if heading.trim().is_empty() {
        diag.error(path.field("text"), "heading is empty");
    }
    if group.items().is_empty() {
        diag.error_with_hint(
            path.clone(),
            format!("group `{heading}` has no items"),
            "list document paths under `children`",
        );
    }

    let items_path = path.field("children");
    let mut seen = FxHashSet::default();
    for (i, item) in group.items().iter().enumerate() {
        let field = items_path.index(i);
        if !item.starts_with('/') {
            diag.error_with_hint(
                field.clone(),
                format!("item `{item}` is not an absolute document path"),
                format!("use \"/{item}\""),
            );
        }
        if !seen.insert(item.as_str()) {
            diag.warn(field, format!("`{item}` is listed twice in group `{heading}`"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navbar_errors(entries: &[NavEntry]) -> Vec<String> {
        let mut diag = ConfigDiagnostics::new();
        validate_navbar(entries, &mut diag);
        diag.errors()
            .iter()
            .map(|e| format!("{}: {}", e.field.as_str(), e.message))
            .collect()
    }

    #[test]
    fn test_valid_navbar() {
        let entries = [
            NavEntry::leaf("首页", "/"),
            NavEntry::group(
                "技术文章",
                [NavEntry::group("学术研究", [NavEntry::leaf("archive1", "/posts/archive1.md")])],
            ),
            NavEntry::leaf("GitHub", "https://github.com"),
        ];
        assert!(navbar_errors(&entries).is_empty());
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let errors = navbar_errors(&[NavEntry::group("空", [])]);
        assert_eq!(errors, ["theme.navbar[0]: group `空` has no children"]);
    }

    #[test]
    fn test_too_deep_navbar() {
        let entries = [NavEntry::group(
            "a",
            [NavEntry::group("b", [NavEntry::group("c", [NavEntry::leaf("d", "/d")])])],
        )];
        let errors = navbar_errors(&entries);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("theme.navbar[0].children[0].children[0]:"));
        assert!(errors[0].contains("nested too deeply"));
    }

    #[test]
    fn test_relative_link_and_blank_label() {
        let errors = navbar_errors(&[NavEntry::leaf(" ", "about")]);
        assert_eq!(
            errors,
            [
                "theme.navbar[0].text: label is empty",
                "theme.navbar[0].link: link `about` is neither an absolute site path nor an external URL",
            ]
        );
    }

    #[test]
    fn test_sidebar_checks() {
        let sections = vec![
            (
                "posts".to_string(),
                vec![SidebarGroup::new("", Vec::<String>::new())],
            ),
            (
                "/notes/".to_string(),
                vec![SidebarGroup::new("笔记", ["/notes/a.md", "notes/b.md", "/notes/a.md"])],
            ),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sections, &mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "theme.sidebar.\"posts\"",
                "theme.sidebar.\"posts\"[0].text",
                "theme.sidebar.\"posts\"[0]",
                "theme.sidebar.\"/notes/\"[0].children[1]",
            ]
        );
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(
            diag.warnings()[0].0.as_str(),
            "theme.sidebar.\"/notes/\"[0].children[2]"
        );
    }

    #[test]
    fn test_duplicate_prefix() {
        let group = SidebarGroup::new("a", ["/a.md"]);
        let sections = vec![
            ("/posts/".to_string(), vec![group.clone()]),
            ("/posts/".to_string(), vec![group]),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sections, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("duplicate sidebar prefix"));
    }

    #[test]
    fn test_unknown_head_tag() {
        let mut diag = ConfigDiagnostics::new();
        validate_head(
            &[HeadTag::new("link", [("rel", "icon")]), HeadTag::new("div", [("id", "x")])],
            &mut diag,
        );
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.head[1].tag");
    }

    #[test]
    fn test_head_content_on_void_tag() {
        let mut diag = ConfigDiagnostics::new();
        validate_head(
            &[
                HeadTag::new("script", [("type", "module")]).with_content("console.log(1)"),
                HeadTag::new("meta", [("name", "author")]).with_content("Misaka"),
            ],
            &mut diag,
        );
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.head[1].content");
    }

    #[test]
    fn test_search_without_suggestions_warns() {
        let theme = ThemeOptions {
            search: true,
            search_max_suggestions: 0,
            ..ThemeOptions::default()
        };
        let mut diag = ConfigDiagnostics::new();
        validate_theme(&theme, &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
