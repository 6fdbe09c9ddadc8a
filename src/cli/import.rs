//! Framework config import.
//!
//! Migrates an existing site: the config object of a `.vuepress/config.js`
//! (as JSON, e.g. from `JSON.stringify`) becomes a `sitemark.toml`.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    io::{Write, stdout},
    path::Path,
};

use crate::config::{ConfigError, ConfigFile};
use crate::log;
use crate::render::from_value;

/// Validate a framework config object and render it as `sitemark.toml`.
pub fn render(json: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(ConfigError::Json)?;
    let site = from_value(value)?;
    let file = ConfigFile::from_site(&site);
    toml::to_string(&file).context("Failed to serialize config")
}

pub fn import_config(input: &Path, output: Option<&Path>, force: bool) -> Result<()> {
    let json = fs::read_to_string(input)
        .map_err(|err| ConfigError::Io(input.to_path_buf(), err))?;
    let content = render(&json)?;

    let Some(path) = output else {
        let mut stdout = stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    if path.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite it",
            path.display()
        );
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))?;
    log!("import"; "wrote {}", path.display());
    Ok(())
}
