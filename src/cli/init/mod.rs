//! Site initialization module.
//!
//! Creates new site structure with default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Starter file set and ignore files
//!
//! `--example` writes the full blog config plus a stub page per link.

mod structure;
mod validate;

use crate::log;
use anyhow::{Context, Result};
use std::path::Path;

pub use structure::SiteFiles;
pub use validate::InitMode;

/// Fallback title when the directory name is not valid UTF-8.
const DEFAULT_TITLE: &str = "My Site";

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Write configuration and pages
/// 3. Write ignore files
///
/// If `dry_run` is true, only prints the config to stdout
pub fn new_site(name: Option<&Path>, dry_run: bool, example: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let (root, mode) = InitMode::target(&cwd, name);

    let files = if example {
        SiteFiles::example()?
    } else {
        let title = root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_TITLE);
        SiteFiles::starter(title)
    };

    if dry_run {
        for path in files.paths() {
            log!("init"; "would write {}", root.join(path).display());
        }
        print!("{}", files.config());
        return Ok(());
    }

    validate::validate_target(&root, mode)?;

    files.write(&root)?;
    structure::write_ignore_files(&root)?;

    log!("init"; "Site initialized at {}", root.display());
    log!("init"; "run `sitemark check` and `sitemark export --format js` next");
    Ok(())
}
