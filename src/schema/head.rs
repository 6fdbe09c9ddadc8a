//! Extra `<head>` tags.

use indexmap::IndexMap;

/// Tag names the framework accepts in `head`.
pub const HEAD_TAGS: &[&str] = &["link", "meta", "script", "style", "noscript", "base", "title"];

/// Void elements: they never carry inner content.
pub const VOID_HEAD_TAGS: &[&str] = &["link", "meta", "base"];

/// A `<head>` element with attributes in written order and optional inner
/// content (inline script, style, title text).
#[derive(Debug, Clone, Default)]
pub struct HeadTag {
    tag: String,
    attrs: IndexMap<String, String>,
    content: Option<String>,
}

impl HeadTag {
    pub fn new<K, V>(tag: impl Into<String>, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tag: tag.into(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &IndexMap<String, String> {
        &self.attrs
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_known_tag(&self) -> bool {
        HEAD_TAGS.contains(&self.tag.as_str())
    }

    pub fn is_void(&self) -> bool {
        VOID_HEAD_TAGS.contains(&self.tag.as_str())
    }
}

impl PartialEq for HeadTag {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.attrs.iter().eq(other.attrs.iter())
            && self.content == other.content
    }
}

impl Eq for HeadTag {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_keep_order() {
        let tag = HeadTag::new("meta", [("name", "author"), ("content", "Misaka")]);
        let keys: Vec<_> = tag.attrs().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "content"]);
        assert!(tag.is_known_tag());
    }

    #[test]
    fn test_content() {
        let tag = HeadTag::new("script", [("type", "module")]).with_content("console.log(1)");
        assert_eq!(tag.content(), Some("console.log(1)"));
        assert!(!tag.is_void());
        assert_ne!(tag, HeadTag::new("script", [("type", "module")]));
        assert!(HeadTag::new("link", [("rel", "icon")]).is_void());
    }

    #[test]
    fn test_unknown_tag() {
        let tag = HeadTag::new("div", [("id", "x")]);
        assert!(!tag.is_known_tag());
    }
}
