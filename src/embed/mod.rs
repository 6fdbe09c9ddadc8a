//! Embedded static resources for sitemark.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `framework` - The generated `.vuepress/config.js` entry module
//! - `init` - Starter files written by `sitemark init`
//!
//! # Usage
//!
//! ```ignore
//! use embed::framework::{CONFIG_JS, ConfigModuleVars};
//!
//! let js = CONFIG_JS.render(&ConfigModuleVars {
//!     source: "sitemark.toml",
//!     bundler: Bundler::Vite,
//!     config_json: &json,
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod framework {
    use super::{Template, TemplateVars};
    use crate::config::Bundler;

    /// Variables for config.js.
    pub struct ConfigModuleVars<'a> {
        /// Config file the module was generated from.
        pub source: &'a str,
        pub bundler: Bundler,
        /// Framework config object as JSON (a valid JS expression).
        pub config_json: &'a str,
    }

    impl TemplateVars for ConfigModuleVars<'_> {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__CONFIG_SOURCE__", self.source)
                .replace("__BUNDLER_PACKAGE__", self.bundler.package())
                .replace("__BUNDLER_FACTORY__", self.bundler.factory())
                .replace("__SITE_CONFIG__", self.config_json)
        }
    }

    /// Framework entry module template.
    pub const CONFIG_JS: Template<ConfigModuleVars<'static>> =
        Template::new(include_str!("framework/config.js"));
}

pub mod init {
    use super::{Template, TemplateVars};

    /// Variables for the starter `sitemark.toml`.
    pub struct StarterVars<'a> {
        pub title: &'a str,
        pub base: &'a str,
    }

    impl TemplateVars for StarterVars<'_> {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__SITE_TITLE__", &toml_string(self.title))
                .replace("__SITE_BASE__", &toml_string(self.base))
        }
    }

    /// Quote as a TOML basic string.
    fn toml_string(s: &str) -> String {
        toml::Value::String(s.to_owned()).to_string()
    }

    /// Variables for the home page.
    pub struct HomeVars<'a> {
        pub title: &'a str,
    }

    impl TemplateVars for HomeVars<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__SITE_TITLE__", self.title)
        }
    }

    /// Minimal starter configuration.
    pub const SITEMARK_TOML: Template<StarterVars<'static>> =
        Template::new(include_str!("init/sitemark.toml"));

    /// Complete blog configuration for `sitemark init --example`.
    pub const BLOG_TOML: &str = include_str!("init/blog.toml");

    /// `docs/README.md`
    pub const README_MD: Template<HomeVars<'static>> =
        Template::new(include_str!("init/README.md"));

    /// `docs/about.md`
    pub const ABOUT_MD: &str = include_str!("init/about.md");

    /// `docs/posts/hello.md`
    pub const HELLO_MD: &str = include_str!("init/hello.md");
}
