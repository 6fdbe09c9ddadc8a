//! Site navigation schema.
//!
//! [`SiteConfig`] is the validated, immutable value handed to the framework.
//! It is only obtainable through [`SiteConfigBuilder::build`], which runs the
//! validation pass in [`validate`] and refuses malformed trees.
//!
//! ```ignore
//! let site = SiteConfig::builder()
//!     .title("御坂美琴の技术博客")
//!     .base("/my-blog/")
//!     .lang("zh-CN")
//!     .nav(NavEntry::leaf("首页", "/"))
//!     .sidebar("/posts/", [SidebarGroup::new("📌 置顶文章", ["/posts/sticky.md"])])
//!     .build()?;
//! ```

mod base;
mod head;
mod lang;
mod nav;
mod options;
mod sidebar;
pub mod validate;

pub use base::BaseUrl;
pub use head::HeadTag;
pub use lang::LanguageTag;
pub use nav::NavEntry;
pub use options::{MarkdownOptions, ThemeOptions};
pub use sidebar::{SidebarGroup, SidebarSections};

use crate::config::{ConfigDiagnostics, ConfigError};
use indexmap::IndexMap;
use validate::fields;

/// Complete site configuration consumed by the framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    title: String,
    description: String,
    base: BaseUrl,
    lang: LanguageTag,
    head: Vec<HeadTag>,
    navigation: Vec<NavEntry>,
    sidebar: SidebarSections,
    theme: ThemeOptions,
    markdown: MarkdownOptions,
}

impl SiteConfig {
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    pub fn lang(&self) -> &LanguageTag {
        &self.lang
    }

    pub fn head(&self) -> &[HeadTag] {
        &self.head
    }

    /// Top-level navbar entries.
    pub fn navigation(&self) -> &[NavEntry] {
        &self.navigation
    }

    pub fn sidebar(&self) -> &SidebarSections {
        &self.sidebar
    }

    pub fn theme(&self) -> &ThemeOptions {
        &self.theme
    }

    pub fn markdown(&self) -> &MarkdownOptions {
        &self.markdown
    }
}

// ============================================================================
// builder
// ============================================================================

/// Collects literal values for a [`SiteConfig`].
///
/// Nothing is checked until [`build`](Self::build).
#[derive(Debug, Default)]
pub struct SiteConfigBuilder {
    title: String,
    description: String,
    base: Option<String>,
    lang: Option<String>,
    head: Vec<HeadTag>,
    navigation: Vec<NavEntry>,
    sidebar: Vec<(String, Vec<SidebarGroup>)>,
    theme: ThemeOptions,
    markdown: MarkdownOptions,
}

impl SiteConfigBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Deployment base path, defaults to `/`.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Language tag, defaults to `en-US`.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn head(mut self, tag: HeadTag) -> Self {
        self.head.push(tag);
        self
    }

    /// Append one navbar entry.
    pub fn nav(mut self, entry: NavEntry) -> Self {
        self.navigation.push(entry);
        self
    }

    pub fn navigation(mut self, entries: impl IntoIterator<Item = NavEntry>) -> Self {
        self.navigation.extend(entries);
        self
    }

    /// Append the sidebar for a route prefix.
    pub fn sidebar(
        mut self,
        prefix: impl Into<String>,
        groups: impl IntoIterator<Item = SidebarGroup>,
    ) -> Self {
        self.sidebar
            .push((prefix.into(), groups.into_iter().collect()));
        self
    }

    pub fn theme(mut self, theme: ThemeOptions) -> Self {
        self.theme = theme;
        self
    }

    pub fn markdown(mut self, markdown: MarkdownOptions) -> Self {
        self.markdown = markdown;
        self
    }

    /// Validate and freeze.
    ///
    /// Warnings are discarded, use [`build_with`](Self::build_with) to see them.
    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        match self.build_with(&mut diag) {
            Some(site) => Ok(site),
            None => Err(ConfigError::InvalidSchema(diag)),
        }
    }

    /// Validate into an existing diagnostics collector.
    ///
    /// Returns `None` when `diag` holds any error afterwards, including
    /// errors recorded before the call.
    pub fn build_with(self, diag: &mut ConfigDiagnostics) -> Option<SiteConfig> {
        let base = match self.base.as_deref() {
            None => Some(BaseUrl::root()),
            Some(raw) => match BaseUrl::parse(raw) {
                Ok(base) => Some(base),
                Err(e) => {
                    diag.error_with_hint(
                        fields::BASE,
                        e.to_string(),
                        format!("use \"{}\"", BaseUrl::suggest(raw)),
                    );
                    None
                }
            },
        };

        let lang = match self.lang.as_deref() {
            None => Some(LanguageTag::default()),
            Some(raw) => match LanguageTag::parse(raw) {
                Ok(lang) => Some(lang),
                Err(e) => {
                    diag.error_with_hint(fields::LANG, e.to_string(), "use a tag like \"en-US\" or \"zh-CN\"");
                    None
                }
            },
        };

        validate::validate_title(&self.title, diag);
        validate::validate_head(&self.head, diag);
        validate::validate_navbar(&self.navigation, diag);
        validate::validate_sidebar(&self.sidebar, diag);
        validate::validate_theme(&self.theme, diag);

        if diag.has_errors() {
            return None;
        }

        Some(SiteConfig {
            title: self.title,
            description: self.description,
            base: base?,
            lang: lang?,
            head: self.head,
            navigation: self.navigation,
            sidebar: SidebarSections::from_map(self.sidebar.into_iter().collect::<IndexMap<_, _>>()),
            theme: self.theme,
            markdown: self.markdown,
        })
    }
}
