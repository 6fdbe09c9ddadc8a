//! `.vuepress/config.js` generation.

use super::to_value;
use crate::config::{Bundler, CONFIG_FILE, ConfigError};
use crate::embed::framework::{CONFIG_JS, ConfigModuleVars};
use crate::schema::SiteConfig;

/// Render the framework entry module for `site`.
///
/// The JSON object is inlined, so the module has no runtime dependency on
/// sitemark.
pub fn config_module(site: &SiteConfig, bundler: Bundler) -> Result<String, ConfigError> {
    let json = format!("{:#}", to_value(site)?);
    Ok(CONFIG_JS.render(&ConfigModuleVars {
        source: CONFIG_FILE,
        bundler,
        config_json: &json,
    }))
}
