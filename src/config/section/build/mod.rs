//! `[build]` section configuration.
//!
//! Where the framework project lives and which bundler it runs.
//!
//! # Example
//!
//! ```toml
//! [build]
//! docs = "docs"       # Markdown source directory (contains .vuepress/)
//! bundler = "vite"    # vite | webpack
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Markdown source directory, relative to the config file.
    pub docs: PathBuf,

    /// Bundler wired into the generated config module.
    pub bundler: Bundler,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            docs: "docs".into(),
            bundler: Bundler::default(),
        }
    }
}

/// Framework bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bundler {
    #[default]
    Vite,
    Webpack,
}

impl Bundler {
    /// npm package providing the bundler.
    pub const fn package(self) -> &'static str {
        match self {
            Self::Vite => "@vuepress/bundler-vite",
            Self::Webpack => "@vuepress/bundler-webpack",
        }
    }

    /// Factory function exported by [`package`](Self::package).
    pub const fn factory(self) -> &'static str {
        match self {
            Self::Vite => "viteBundler",
            Self::Webpack => "webpackBundler",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.docs, PathBuf::from("docs"));
        assert_eq!(config.build.bundler, Bundler::Vite);
    }

    #[test]
    fn test_webpack() {
        let config = test_parse_config("[build]\ndocs = \"src\"\nbundler = \"webpack\"");
        assert_eq!(config.build.docs, PathBuf::from("src"));
        assert_eq!(config.build.bundler.factory(), "webpackBundler");
        assert_eq!(config.build.bundler.package(), "@vuepress/bundler-webpack");
    }
}
