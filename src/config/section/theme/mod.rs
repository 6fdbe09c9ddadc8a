//! `[theme]` section configuration.
//!
//! Default theme options plus the navbar and sidebar trees.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "/images/misaka.jpg"
//! edit_link = false
//! last_updated = true
//! contributors = false
//! footer = "Made with ❤️ by Misaka | Powered by VuePress"
//! display_footer = true
//! search = true
//! search_max_suggestions = 10
//! ```

mod navbar;
mod sidebar;

pub use navbar::{NavItemSpec, to_entries};
pub use sidebar::SidebarGroupSpec;

use crate::schema::ThemeOptions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Navbar logo.
    pub logo: Option<String>,

    /// Top navigation bar.
    pub navbar: Vec<NavItemSpec>,

    /// Sidebar groups keyed by route prefix, in written order.
    pub sidebar: IndexMap<String, Vec<SidebarGroupSpec>>,

    pub edit_link: bool,
    pub last_updated: bool,
    pub contributors: bool,
    pub footer: Option<String>,
    pub display_footer: bool,
    pub search: bool,
    pub search_max_suggestions: u32,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        Self::with_options(&ThemeOptions::default())
    }
}

impl ThemeSectionConfig {
    /// Section with `options` and empty trees.
    pub fn with_options(options: &ThemeOptions) -> Self {
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

    /// Scalar options, without the trees.
    pub fn options(&self) -> ThemeOptions {
        ThemeOptions {
            logo: self.logo.clone(),
            edit_link: self.edit_link,
            last_updated: self.last_updated,
            contributors: self.contributors,
            footer: self.footer.clone(),
            display_footer: self.display_footer,
            search: self.search,
            search_max_suggestions: self.search_max_suggestions,
        }
    }
}
