//! The object shape the default theme reads.
//!
//! ```json
//! {
//!   "title": "御坂美琴の技术博客",
//!   "base": "/my-blog/",
//!   "head": [
//!     ["link", { "rel": "icon", "href": "/favicon.ico" }],
//!     ["script", {}, "console.log(1)"]
//!   ],
//!   "theme": {
//!     "navbar": [{ "text": "首页", "link": "/" }],
//!     "sidebar": { "/posts/": [{ "text": "📌 置顶文章", "children": ["/posts/sticky.md"] }] },
//!     "editLink": false
//!   },
//!   "markdown": { "code": { "lineNumbers": false } }
//! }
//! ```
//!
//! Parsing goes back through [`ConfigFile`] so a hand-edited object gets
//! the same diagnostics as `sitemark.toml`.

use crate::config::{
    ConfigError, ConfigFile, HeadEntry, MarkdownSectionConfig, NavItemSpec, SidebarGroupSpec,
    SiteSectionConfig, ThemeSectionConfig,
};
use crate::schema::{HeadTag, SiteConfig, ThemeOptions};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
struct FrameworkConfig {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    lang: Option<String>,
    #[serde(default)]
    head: Vec<FrameworkHead>,
    #[serde(default)]
    theme: FrameworkTheme,
    #[serde(default)]
    markdown: FrameworkMarkdown,
}

/// `[tag, attrs]` or `[tag, attrs, innerHTML]`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum FrameworkHead {
    WithContent(String, IndexMap<String, String>, String),
    Tag(String, IndexMap<String, String>),
}

impl FrameworkHead {
    fn from_tag(tag: &HeadTag) -> Self {
        let (name, attrs) = (tag.tag().to_string(), tag.attrs().clone());
        match tag.content() {
            Some(content) => Self::WithContent(name, attrs, content.to_string()),
            None => Self::Tag(name, attrs),
        }
    }

    fn into_entry(self) -> HeadEntry {
        let (tag, attrs, content) = match self {
            Self::WithContent(tag, attrs, content) => (tag, attrs, Some(content)),
            Self::Tag(tag, attrs) => (tag, attrs, None),
        };
        HeadEntry {
            tag,
            attrs,
            content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FrameworkTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<String>,
    navbar: Vec<NavItemSpec>,
    sidebar: IndexMap<String, Vec<SidebarGroupSpec>>,
    edit_link: bool,
    last_updated: bool,
    contributors: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<String>,
    display_footer: bool,
    search: bool,
    search_max_suggestions: u32,
}

impl Default for FrameworkTheme {
    fn default() -> Self {
        Self::from_options(&ThemeOptions::default())
    }
}

impl FrameworkTheme {
    fn from_options(options: &ThemeOptions) -> Self {
        Self {
            logo: options.logo.clone(),
            navbar: Vec::new(),
            sidebar: IndexMap::new(),
            edit_link: options.edit_link,
            last_updated: options.last_updated,
            contributors: options.contributors,
            footer: options.footer.clone(),
            display_footer: options.display_footer,
            search: options.search,
            search_max_suggestions: options.search_max_suggestions,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FrameworkMarkdown {
    #[serde(default)]
    code: FrameworkCode,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameworkCode {
    line_numbers: bool,
}

impl Default for FrameworkCode {
    fn default() -> Self {
        Self { line_numbers: true }
    }
}

impl FrameworkConfig {
    fn from_site(site: &SiteConfig) -> Self {
        let mut theme = FrameworkTheme::from_options(site.theme());
        theme.navbar = site.navigation().iter().map(NavItemSpec::from_entry).collect();
        theme.sidebar = site
            .sidebar()
            .iter()
            .map(|(prefix, groups)| {
                let groups = groups.iter().map(SidebarGroupSpec::from).collect::<Vec<_>>();
                (prefix.to_string(), groups)
            })
            .collect();

        Self {
            title: site.title().to_string(),
            description: site.description().to_string(),
            base: Some(site.base().as_str().to_string()),
            lang: Some(site.lang().as_str().to_string()),
            head: site.head().iter().map(FrameworkHead::from_tag).collect(),
            theme,
            markdown: FrameworkMarkdown {
                code: FrameworkCode {
                    line_numbers: site.markdown().line_numbers,
                },
            },
        }
    }

    fn into_file(self) -> ConfigFile {
        let mut site = SiteSectionConfig {
            title: self.title,
            description: self.description,
            base: self.base,
            head: self.head.into_iter().map(FrameworkHead::into_entry).collect(),
            ..SiteSectionConfig::default()
        };
        if let Some(lang) = self.lang {
            site.lang = lang;
        }

        let theme = self.theme;
        ConfigFile {
            site,
            theme: ThemeSectionConfig {
                logo: theme.logo,
                navbar: theme.navbar,
                sidebar: theme.sidebar,
                edit_link: theme.edit_link,
                last_updated: theme.last_updated,
                contributors: theme.contributors,
                footer: theme.footer,
                display_footer: theme.display_footer,
                search: theme.search,
                search_max_suggestions: theme.search_max_suggestions,
            },
            markdown: MarkdownSectionConfig {
                line_numbers: self.markdown.code.line_numbers,
            },
            ..ConfigFile::default()
        }
    }
}

/// Framework config object for `site`, keys in framework order.
pub fn to_value(site: &SiteConfig) -> Result<Value, ConfigError> {
    Ok(serde_json::to_value(FrameworkConfig::from_site(site))?)
}

/// Parse a framework config object and validate it.
pub fn from_value(value: Value) -> Result<SiteConfig, ConfigError> {
    let config: FrameworkConfig = serde_json::from_value(value)?;
    config.into_file().to_site()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::init::BLOG_TOML;
    use crate::schema::{NavEntry, SidebarGroup};
    use serde_json::json;

    fn blog() -> SiteConfig {
        ConfigFile::parse(BLOG_TOML).unwrap().to_site().unwrap()
    }

    #[test]
    fn test_framework_shape() {
        let site = SiteConfig::builder()
            .title("t")
            .base("/my-blog/")
            .head(HeadTag::new("link", [("rel", "icon"), ("href", "/favicon.ico")]))
            .nav(NavEntry::leaf("首页", "/"))
            .nav(NavEntry::group("技术文章", [NavEntry::leaf("a", "/posts/a.md")]))
            .sidebar("/posts/", [SidebarGroup::new("置顶文章", ["/posts/sticky.md"])])
            .build()
            .unwrap();
        let value = to_value(&site).unwrap();

        assert_eq!(value["base"], "/my-blog/");
        assert_eq!(value["head"], json!([["link", { "rel": "icon", "href": "/favicon.ico" }]]));
        assert_eq!(
            value["theme"]["navbar"],
            json!([
                { "text": "首页", "link": "/" },
                { "text": "技术文章", "children": [{ "text": "a", "link": "/posts/a.md" }] }
            ])
        );
        assert_eq!(
            value["theme"]["sidebar"],
            json!({ "/posts/": [{ "text": "置顶文章", "children": ["/posts/sticky.md"] }] })
        );
        assert_eq!(value["theme"]["editLink"], true);
        assert_eq!(value["theme"]["searchMaxSuggestions"], 10);
        assert!(value["theme"].get("logo").is_none());
        assert_eq!(value["markdown"]["code"]["lineNumbers"], true);
    }

    #[test]
    fn test_key_order() {
        let value = to_value(&blog()).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["title", "description", "base", "lang", "head", "theme", "markdown"]
        );
        let head_attrs: Vec<_> = value["head"][2][1]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(head_attrs, ["name", "content"]);
    }

    #[test]
    fn test_round_trip() {
        let site = blog();
        assert_eq!(from_value(to_value(&site).unwrap()).unwrap(), site);
    }

    #[test]
    fn test_shorthand_links_export_bare() {
        let value = to_value(&blog()).unwrap();
        let research = &value["theme"]["navbar"][2]["children"][0];
        assert_eq!(research["text"], "学术研究");
        assert_eq!(research["children"][0], "/posts/archive1.md");
        assert_eq!(research["children"][1], "/posts/archive2.md");
        assert_eq!(value["theme"]["navbar"][0], json!({ "text": "首页", "link": "/" }));
    }

    #[test]
    fn test_head_with_content() {
        let value = json!({
            "title": "t",
            "head": [
                ["link", { "rel": "icon", "href": "/favicon.ico" }],
                ["script", { "src": "/a.js" }, "console.log(1)"]
            ]
        });
        let site = from_value(value.clone()).unwrap();
        assert_eq!(site.head()[0].content(), None);
        assert_eq!(site.head()[1].tag(), "script");
        assert_eq!(site.head()[1].content(), Some("console.log(1)"));
        assert_eq!(to_value(&site).unwrap()["head"], value["head"]);
    }

    #[test]
    fn test_from_value_validates() {
        let value = json!({
            "title": "t",
            "base": "/my-blog",
            "theme": {
                "navbar": [{ "text": "A", "link": "/posts/a.md", "children": [] }]
            }
        });
        let Err(ConfigError::InvalidSchema(diag)) = from_value(value) else {
            panic!("expected InvalidSchema");
        };
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["theme.navbar[0]", "site.base"]);
    }

    #[test]
    fn test_from_value_rejects_wrong_shape() {
        let result = from_value(json!({ "title": 1 }));
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
