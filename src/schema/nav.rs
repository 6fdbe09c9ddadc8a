//! Top navigation bar tree.

use crate::utils::path::label_from_path;

/// One node of the navigation bar.
///
/// A node is either a direct link or a labeled group of further nodes.
/// The two shapes are separate variants so a node can never carry both
/// a link and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    /// Clickable entry pointing at a page or an external URL.
    ///
    /// `page_title` leaves were written as a bare path: the framework shows
    /// the page's own title and `label` is only the file stem.
    Leaf {
        label: String,
        link: String,
        page_title: bool,
    },
    /// Dropdown (top level) or labeled section (inside a dropdown).
    Group {
        label: String,
        children: Vec<NavEntry>,
    },
}

impl NavEntry {
    pub fn leaf(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Leaf {
            label: label.into(),
            link: link.into(),
            page_title: false,
        }
    }

    /// Leaf labeled by the linked page itself (`"/posts/a.md"` shorthand).
    pub fn page(link: impl Into<String>) -> Self {
        let link = link.into();
        Self::Leaf {
            label: label_from_path(&link),
            link,
            page_title: true,
        }
    }

    pub fn group(label: impl Into<String>, children: impl IntoIterator<Item = NavEntry>) -> Self {
        Self::Group {
            label: label.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Group { label, .. } => label,
        }
    }

    /// Link target, `None` for groups.
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Leaf { link, .. } => Some(link),
            Self::Group { .. } => None,
        }
    }

    /// Child entries, empty for leaves.
    pub fn children(&self) -> &[NavEntry] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Group { children, .. } => children,
        }
    }

    /// Whether the framework takes the label from the page title.
    pub const fn is_page_titled(&self) -> bool {
        matches!(self, Self::Leaf { page_title: true, .. })
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Number of levels including this node (a leaf is 1).
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }

    /// All leaf links below this node, depth-first in author order.
    pub fn links(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_links(&mut out);
        out
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Leaf { link, .. } => out.push(link),
            Self::Group { children, .. } => {
                for child in children {
                    child.collect_links(out);
                }
            }
        }
    }
}
