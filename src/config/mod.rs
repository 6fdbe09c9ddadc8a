//! Site configuration management for `sitemark.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── markdown   # [markdown]
//! │   ├── site/      # [site], [[site.head]]
//! │   └── theme/     # [theme], [[theme.navbar]], [theme.sidebar]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ConfigFile, Project (this file)
//! ```
//!
//! The file form ([`ConfigFile`]) is deliberately loose: it mirrors what
//! authors write, shorthand included. [`ConfigFile::into_site`] turns it
//! into the strict [`SiteConfig`], collecting every diagnostic on the way.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildSectionConfig, Bundler, HeadEntry, MarkdownSectionConfig, NavItemSpec,
    SidebarGroupSpec, SiteSectionConfig, ThemeSectionConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::schema::{SiteConfig, validate::fields};
use crate::utils::path::normalize_path;
use crate::{debug, log};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "sitemark.toml";

// ============================================================================
// file form
// ============================================================================

/// Root structure of `sitemark.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Site metadata.
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Theme options, navbar and sidebar.
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Markdown toggles.
    #[serde(default)]
    pub markdown: MarkdownSectionConfig,

    /// Framework project settings.
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl ConfigFile {
    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;
        Self::read_confirmation(io::stdin().lock())
    }

    /// One answer line; anything but `y`/`yes` declines.
    fn read_confirmation(mut input: impl std::io::BufRead) -> Result<bool> {
        let mut line = String::new();
        input.read_line(&mut line)?;

        let line = line.trim().to_lowercase();
        Ok(line == "y" || line == "yes")
    }

    /// Convert into the validated schema.
    ///
    /// Returns `None` if any error was reported into `diag`.
    pub fn into_site(&self, diag: &mut ConfigDiagnostics) -> Option<SiteConfig> {
        self.site.validate(diag);

        // A structurally broken navbar is left out of the semantic checks so
        // every reported path still matches the file.
        let navigation = section::theme::to_entries(&self.theme.navbar, &fields::NAVBAR, diag)
            .unwrap_or_default();

        let mut builder = SiteConfig::builder()
            .title(self.site.title.clone())
            .description(self.site.description.clone())
            .lang(self.site.lang.clone())
            .navigation(navigation)
            .theme(self.theme.options())
            .markdown(self.markdown.options());

        if let Some(base) = self.site.resolved_base() {
            builder = builder.base(base);
        }
        for entry in &self.site.head {
            builder = builder.head(entry.to_tag());
        }
        for (prefix, groups) in &self.theme.sidebar {
            builder = builder.sidebar(prefix.clone(), groups.iter().map(SidebarGroupSpec::to_group));
        }

        builder.build_with(diag)
    }

    /// Written form of a validated config.
    ///
    /// `base` is always explicit and page-titled navbar leaves stay bare
    /// paths, so the result converts back into an equal [`SiteConfig`].
    pub fn from_site(site: &SiteConfig) -> Self {
        let mut theme = ThemeSectionConfig::with_options(site.theme());
        theme.navbar = site.navigation().iter().map(NavItemSpec::from_entry).collect();
        theme.sidebar = site
            .sidebar()
            .iter()
            .map(|(prefix, groups)| {
                (prefix.to_string(), groups.iter().map(SidebarGroupSpec::from).collect())
            })
            .collect();

        Self {
            site: SiteSectionConfig {
                title: site.title().to_string(),
                description: site.description().to_string(),
                base: Some(site.base().as_str().to_string()),
                url: None,
                lang: site.lang().as_str().to_string(),
                head: site.head().iter().map(HeadEntry::from_tag).collect(),
            },
            theme,
            markdown: MarkdownSectionConfig {
                line_numbers: site.markdown().line_numbers,
            },
            build: BuildSectionConfig::default(),
        }
    }

    /// [`into_site`](Self::into_site), discarding warnings.
    pub fn to_site(&self) -> Result<SiteConfig, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.into_site(&mut diag)
            .ok_or(ConfigError::InvalidSchema(diag))
    }
}

// ============================================================================
// project
// ============================================================================

/// A loaded site project: where it lives plus the validated config.
#[derive(Debug, Clone)]
pub struct Project {
    /// Absolute path to the config file
    pub config_path: PathBuf,
    /// Project root directory - parent of config file
    pub root: PathBuf,
    /// Absolute markdown source directory
    pub docs: PathBuf,
    pub bundler: Bundler,
    pub site: SiteConfig,
}

impl Project {
    /// Search upward from cwd for `config_name` and load it.
    pub fn load(config_name: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config_name) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run `sitemark init` to create one",
                config_name.display()
            )));
        };

        let file = ConfigFile::from_path(&config_path)?;
        Self::from_file(&config_path, &file)
    }

    /// Build a project from an already parsed file.
    ///
    /// Warnings are printed, errors are returned as
    /// [`ConfigError::InvalidSchema`].
    pub fn from_file(config_path: &Path, file: &ConfigFile) -> Result<Self> {
        let config_path = normalize_path(config_path);
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut diag = ConfigDiagnostics::new();
        let site = file.into_site(&mut diag);
        diag.print_warnings();
        let Some(site) = site else {
            bail!(ConfigError::InvalidSchema(diag));
        };

        let docs = Self::resolve_docs(&file.build.docs, &root);
        debug!(
            "config";
            "loaded {} ({} navbar entries, {} sidebar prefixes)",
            config_path.display(),
            site.navigation().len(),
            site.sidebar().len()
        );

        Ok(Self {
            config_path,
            root,
            docs,
            bundler: file.build.bundler,
            site,
        })
    }

    /// Resolve the docs directory with tilde expansion.
    fn resolve_docs(path: &Path, root: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path.to_str().unwrap_or_default()).into_owned();
        let path = PathBuf::from(expanded);
        let full_path = if path.is_relative() {
            root.join(&path)
        } else {
            path
        };
        normalize_path(&full_path)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> ConfigFile {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = ConfigFile::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
