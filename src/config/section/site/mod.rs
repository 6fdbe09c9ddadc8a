//! `[site]` section configuration.
//!
//! Site metadata, deployment base and extra `<head>` tags.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "御坂美琴の技术博客"
//! description = "天津大学硕士生的技术博客 - 三维重建 | Java后端开发"
//! base = "/my-blog/"
//! lang = "zh-CN"
//!
//! [[site.head]]
//! tag = "link"
//! attrs = { rel = "icon", href = "/favicon.ico" }
//! ```
//!
//! When `base` is omitted it is taken from the path of `url`, so a GitHub
//! Pages project site `https://user.github.io/my-blog` deploys under
//! `/my-blog/`.

mod head;

pub use head::HeadEntry;

use crate::config::ConfigDiagnostics;
use crate::config::util::extract_url_path;
use crate::schema::{LanguageTag, validate::fields};
use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Deployment base path, must start and end with `/`.
    pub base: Option<String>,

    /// Public site URL (e.g., "https://user.github.io/my-blog").
    pub url: Option<String>,

    /// Language code (e.g., "en-US", "zh-CN").
    pub lang: String,

    /// Extra `<head>` tags.
    pub head: Vec<HeadEntry>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base: None,
            url: None,
            lang: LanguageTag::default().as_str().to_string(),
            head: Vec::new(),
        }
    }
}

impl SiteSectionConfig {
    /// Effective base: explicit `base`, else the path of `url`, else `/`.
    pub fn resolved_base(&self) -> Option<String> {
        if let Some(base) = &self.base {
            return Some(base.clone());
        }
        let path = self.url.as_deref().and_then(extract_url_path)?;
        Some(crate::schema::BaseUrl::from_url_path(&path).as_str().to_string())
    }

    /// Validate `url` format.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        fields::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        fields::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    fields::URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}
