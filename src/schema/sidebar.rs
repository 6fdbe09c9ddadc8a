//! Sidebar groups keyed by route prefix.

use indexmap::IndexMap;

/// A labeled, ordered cluster of content links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarGroup {
    heading: String,
    items: Vec<String>,
}

impl SidebarGroup {
    pub fn new(heading: impl Into<String>, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            heading: heading.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Heading text, including any decorative prefix (e.g. `📌 置顶文章`).
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Document paths in rendered order.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// Sidebar sections, one ordered group list per route prefix.
///
/// Prefix order is kept as written; equality compares it too.
#[derive(Debug, Clone, Default)]
pub struct SidebarSections(IndexMap<String, Vec<SidebarGroup>>);

impl SidebarSections {
    pub(crate) fn from_map(map: IndexMap<String, Vec<SidebarGroup>>) -> Self {
        Self(map)
    }

    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.0.get(prefix).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarGroup])> {
        self.0
            .iter()
            .map(|(prefix, groups)| (prefix.as_str(), groups.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sidebar shown on `route`: the longest prefix the route starts with.
    pub fn resolve(&self, route: &str) -> Option<(&str, &[SidebarGroup])> {
        self.iter()
            .filter(|(prefix, _)| route.starts_with(prefix))
            .max_by_key(|(prefix, _)| prefix.len())
    }
}

impl PartialEq for SidebarSections {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for SidebarSections {}
