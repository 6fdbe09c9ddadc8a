//! `[theme.sidebar]` groups in their written form.
//!
//! # Example
//!
//! ```toml
//! [theme.sidebar]
//! "/posts/" = [
//!   { text = "📌 置顶文章", children = ["/posts/sticky.md", "/posts/sticky2.md"] },
//!   { text = "🎓 学术研究", children = ["/posts/archive1.md", "/posts/archive2.md"] },
//! ]
//! ```

use crate::schema::SidebarGroup;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroupSpec {
    /// Group heading.
    #[serde(default, alias = "heading")]
    pub text: String,

    /// Document paths in display order.
    #[serde(default, alias = "items")]
    pub children: Vec<String>,
}

impl SidebarGroupSpec {
    pub fn to_group(&self) -> SidebarGroup {
        SidebarGroup::new(self.text.clone(), self.children.iter().cloned())
    }
}

impl From<&SidebarGroup> for SidebarGroupSpec {
    fn from(group: &SidebarGroup) -> Self {
        Self {
            text: group.heading().to_string(),
            children: group.items().to_vec(),
        }
    }
}
