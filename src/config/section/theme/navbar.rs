//! `[[theme.navbar]]` entries in their written form.
//!
//! # Example
//!
//! ```toml
//! [[theme.navbar]]
//! text = "首页"
//! link = "/"
//!
//! [[theme.navbar]]
//! text = "技术文章"
//! children = [
//!   { text = "学术研究", children = ["/posts/archive1.md", "/posts/archive2.md"] },
//! ]
//! ```
//!
//! A bare string is shorthand for a link labeled with the file stem.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::schema::NavEntry;
use serde::{Deserialize, Serialize};

/// A navbar node as written, before the link/children exclusivity is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItemSpec {
    /// `"/posts/a.md"`
    Path(String),
    /// `{ text = "...", link = "..." }` or `{ text = "...", children = [...] }`
    Item(NavItemTable),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavItemTable {
    /// Display label.
    #[serde(default, alias = "label")]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavItemSpec>>,
}

impl NavItemSpec {
    /// Convert into a tree node, reporting ambiguous or empty nodes.
    ///
    /// A node whose subtree had errors yields `None` so a broken child
    /// does not also report its parent as empty.
    pub fn to_entry(&self, path: FieldPath, diag: &mut ConfigDiagnostics) -> Option<NavEntry> {
        let item = match self {
            Self::Path(link) => return Some(NavEntry::page(link.clone())),
            Self::Item(item) => item,
        };

        match (&item.link, &item.children) {
            (Some(_), Some(_)) => {
                diag.error_with_hint(
                    path,
                    format!("ambiguous node `{}`: sets both `link` and `children`", item.text),
                    "keep `link` for a page entry or `children` for a group",
                );
                None
            }
            (None, None) => {
                diag.error_with_hint(
                    path,
                    format!("node `{}` has neither `link` nor `children`", item.text),
                    "add a `link` or a `children` list",
                );
                None
            }
            (Some(link), None) => Some(NavEntry::leaf(item.text.clone(), link.clone())),
            (None, Some(children)) => {
                let children_path = path.field("children");
                let mut entries = Vec::with_capacity(children.len());
                let mut broken = false;
                for (i, child) in children.iter().enumerate() {
                    match child.to_entry(children_path.index(i), diag) {
                        Some(entry) => entries.push(entry),
                        None => broken = true,
                    }
                }
                (!broken).then(|| NavEntry::group(item.text.clone(), entries))
            }
        }
    }

    /// Written form of a tree node; page-titled leaves go back to a bare path.
    pub fn from_entry(entry: &NavEntry) -> Self {
        let table = match entry {
            NavEntry::Leaf {
                link,
                page_title: true,
                ..
            } => return Self::Path(link.clone()),
            NavEntry::Leaf { label, link, .. } => NavItemTable {
                text: label.clone(),
                link: Some(link.clone()),
                children: None,
            },
            NavEntry::Group { label, children } => NavItemTable {
                text: label.clone(),
                link: None,
                children: Some(children.iter().map(Self::from_entry).collect()),
            },
        };
        Self::Item(table)
    }
}

/// Convert a whole navbar, one diagnostic per broken node.
///
/// Returns `None` if any node was broken.
pub fn to_entries(
    items: &[NavItemSpec],
    root: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<Vec<NavEntry>> {
    let mut entries = Vec::with_capacity(items.len());
    let mut broken = false;
    for (i, item) in items.iter().enumerate() {
        match item.to_entry(root.index(i), diag) {
            Some(entry) => entries.push(entry),
            None => broken = true,
        }
    }
    (!broken).then_some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::schema::validate::fields::NAVBAR;

    fn convert(items: &[NavItemSpec]) -> (Option<Vec<NavEntry>>, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let entries = to_entries(items, &NAVBAR, &mut diag);
        (entries, diag)
    }

    fn leaf(text: &str, link: &str) -> NavItemSpec {
        NavItemSpec::Item(NavItemTable {
            text: text.into(),
            link: Some(link.into()),
            children: None,
        })
    }

    #[test]
    fn test_parse_navbar() {
        let config = test_parse_config(
            r#"
[[theme.navbar]]
text = "首页"
link = "/"

[[theme.navbar]]
text = "技术文章"
children = [
  { text = "学术研究", children = ["/posts/archive1.md", "/posts/archive2.md"] },
]
"#,
        );
        let (entries, diag) = convert(&config.theme.navbar);
        assert!(diag.is_empty());
        let entries = entries.unwrap();
        assert_eq!(entries[0], NavEntry::leaf("首页", "/"));
        assert_eq!(
            entries[1],
            NavEntry::group(
                "技术文章",
                [NavEntry::group(
                    "学术研究",
                    [
                        NavEntry::page("/posts/archive1.md"),
                        NavEntry::page("/posts/archive2.md"),
                    ]
                )]
            )
        );
    }

    #[test]
    fn test_label_alias() {
        let config = test_parse_config("[[theme.navbar]]\nlabel = \"关于我\"\nlink = \"/about\"");
        let (entries, _) = convert(&config.theme.navbar);
        assert_eq!(entries.unwrap()[0].label(), "关于我");
    }

    #[test]
    fn test_leaf_with_empty_children_is_ambiguous() {
        let mutated = NavItemSpec::Item(NavItemTable {
            text: "三维重建项目".into(),
            link: None,
            children: Some(vec![NavItemSpec::Item(NavItemTable {
                text: "A".into(),
                link: Some("/posts/a.md".into()),
                children: Some(vec![]),
            })]),
        });
        let items = [NavItemSpec::Item(NavItemTable {
            text: "项目展示".into(),
            link: None,
            children: Some(vec![mutated]),
        })];

        let (entries, diag) = convert(&items);
        assert!(entries.is_none());
        assert_eq!(diag.len(), 1);
        let err = &diag.errors()[0];
        assert_eq!(err.field.as_str(), "theme.navbar[0].children[0].children[0]");
        assert!(err.message.contains("ambiguous node `A`"));
    }

    #[test]
    fn test_node_without_link_or_children() {
        let items = [NavItemSpec::Item(NavItemTable {
            text: "孤儿".into(),
            ..NavItemTable::default()
        })];
        let (_, diag) = convert(&items);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("neither"));
    }

    #[test]
    fn test_every_broken_sibling_is_reported() {
        let both = NavItemSpec::Item(NavItemTable {
            text: "关于我".into(),
            link: Some("/about".into()),
            children: Some(vec![leaf("a", "/a.md")]),
        });
        let items = [NavItemSpec::Item(NavItemTable::default()), leaf("首页", "/"), both];
        let (entries, diag) = convert(&items);
        assert!(entries.is_none());
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["theme.navbar[0]", "theme.navbar[2]"]);
    }

    #[test]
    fn test_from_entry_keeps_shorthand() {
        let entry = NavEntry::group(
            "g",
            [NavEntry::leaf("a", "/a.md"), NavEntry::page("/posts/b.md")],
        );
        let spec = NavItemSpec::from_entry(&entry);
        let mut diag = ConfigDiagnostics::new();
        assert_eq!(spec.to_entry(NAVBAR.index(0), &mut diag), Some(entry));
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(
            json,
            r#"{"text":"g","children":[{"text":"a","link":"/a.md"},"/posts/b.md"]}"#
        );
    }
}
