//! `[[site.head]]` entries.

use crate::schema::HeadTag;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadEntry {
    /// Element name (`link`, `meta`, ...).
    pub tag: String,

    /// Attributes in written order.
    #[serde(default)]
    pub attrs: IndexMap<String, String>,

    /// Inner content for `script`, `style`, `noscript` or `title`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadEntry {
    pub fn from_tag(tag: &HeadTag) -> Self {
        Self {
            tag: tag.tag().to_string(),
            attrs: tag.attrs().clone(),
            content: tag.content().map(str::to_string),
        }
    }

    pub fn to_tag(&self) -> HeadTag {
        let tag = HeadTag::new(self.tag.clone(), self.attrs.clone());
        match &self.content {
            Some(content) => tag.with_content(content.clone()),
            None => tag,
        }
    }
}
