//! `[markdown]` section configuration.
//!
//! ```toml
//! [markdown]
//! line_numbers = false
//! ```

use crate::schema::MarkdownOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownSectionConfig {
    /// Line numbers on fenced code blocks.
    pub line_numbers: bool,
}

impl Default for MarkdownSectionConfig {
    fn default() -> Self {
        Self {
            line_numbers: MarkdownOptions::default().line_numbers,
        }
    }
}

impl MarkdownSectionConfig {
    pub fn options(&self) -> MarkdownOptions {
        MarkdownOptions {
            line_numbers: self.line_numbers,
        }
    }
}
