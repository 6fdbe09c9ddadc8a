//! Starter file set for a new site.
//!
//! ```text
//! my-blog/
//! ├── sitemark.toml
//! ├── .gitignore
//! └── docs/
//!     ├── .vuepress/
//!     ├── README.md
//!     ├── about.md
//!     └── posts/hello.md
//! ```
//!
//! The example blog gets one stub page per internal link instead, so a
//! fresh `sitemark check` passes.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::cli::check::{resolve::primary_document, site_links};
use crate::config::{BuildSectionConfig, CONFIG_FILE, ConfigFile};
use crate::embed::init::{
    ABOUT_MD, BLOG_TOML, HELLO_MD, HomeVars, README_MD, SITEMARK_TOML, StarterVars,
};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Framework build output and caches.
const IGNORE_PATTERNS: &[&str] = &[
    "node_modules/",
    "/docs/.vuepress/.cache/",
    "/docs/.vuepress/.temp/",
    "/docs/.vuepress/dist/",
    ".DS_Store",
];

/// Files of a new site, relative to its root, in write order.
#[derive(Debug, Default)]
pub struct SiteFiles {
    files: IndexMap<PathBuf, String>,
}

impl SiteFiles {
    /// Minimal starter titled `title`.
    pub fn starter(title: &str) -> Self {
        let docs = BuildSectionConfig::default().docs;
        let mut files = Self::default();
        files.insert(
            CONFIG_FILE,
            SITEMARK_TOML.render(&StarterVars { title, base: "/" }),
        );
        files.insert(docs.join("README.md"), README_MD.render(&HomeVars { title }));
        files.insert(docs.join("about.md"), ABOUT_MD.to_string());
        files.insert(docs.join("posts/hello.md"), HELLO_MD.to_string());
        files
    }

    /// The complete example blog, with a stub page for every link.
    pub fn example() -> Result<Self> {
        let file = ConfigFile::parse(BLOG_TOML)?;
        let site = file.to_site()?;
        let docs = &file.build.docs;

        let mut files = Self::default();
        files.insert(CONFIG_FILE, BLOG_TOML.to_string());
        files.insert(
            docs.join("README.md"),
            README_MD.render(&HomeVars { title: site.title() }),
        );
        for link in site_links(&site) {
            if let Some(doc) = primary_document(link.link) {
                files
                    .files
                    .entry(docs.join(doc))
                    .or_insert_with(|| format!("# {}\n", link.label));
            }
        }
        Ok(files)
    }

    fn insert(&mut self, path: impl Into<PathBuf>, content: String) {
        self.files.insert(path.into(), content);
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Content of the generated `sitemark.toml`.
    pub fn config(&self) -> &str {
        self.files
            .get(Path::new(CONFIG_FILE))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Write every file under `root`, creating directories as needed.
    pub fn write(&self, root: &Path) -> Result<()> {
        for (relative, content) in &self.files {
            let path = root.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory '{}'", parent.display())
                })?;
            }
            fs::write(&path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }

        let vuepress = root.join(BuildSectionConfig::default().docs).join(".vuepress");
        fs::create_dir_all(&vuepress)
            .with_context(|| format!("Failed to create directory '{}'", vuepress.display()))?;
        Ok(())
    }
}

/// Write .gitignore with framework output patterns
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let content = IGNORE_PATTERNS.join("\n") + "\n";

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
