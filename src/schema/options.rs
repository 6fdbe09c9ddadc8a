//! Theme and markdown toggles passed through to the framework.

/// Default theme options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Navbar logo (absolute site path or URL).
    pub logo: Option<String>,
    /// Show the "edit this page" link.
    pub edit_link: bool,
    /// Show the last updated timestamp.
    pub last_updated: bool,
    /// Show the contributors list.
    pub contributors: bool,
    /// Footer text of the home page.
    pub footer: Option<String>,
    pub display_footer: bool,
    /// Enable the search box.
    pub search: bool,
    pub search_max_suggestions: u32,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            logo: None,
            edit_link: true,
            last_updated: true,
            contributors: true,
            footer: None,
            display_footer: false,
            search: false,
            search_max_suggestions: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Line numbers on code blocks.
    pub line_numbers: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self { line_numbers: true }
    }
}
