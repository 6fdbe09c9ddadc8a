//! Framework config export.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{Write, stdout},
    path::PathBuf,
};

use crate::cli::args::{ExportArgs, ExportFormat};
use crate::config::Project;
use crate::log;
use crate::render::{config_module, to_value};

/// Render the config object in the requested format.
pub fn render(project: &Project, args: &ExportArgs) -> Result<String> {
    let content = match args.format {
        ExportFormat::Json => {
            let value = to_value(&project.site)?;
            if args.pretty {
                format!("{value:#}\n")
            } else {
                format!("{value}\n")
            }
        }
        ExportFormat::Js => config_module(&project.site, project.bundler)?,
    };
    Ok(content)
}

/// Where output goes: `None` means stdout.
pub fn target(project: &Project, args: &ExportArgs) -> Option<PathBuf> {
    match (&args.output, args.format) {
        (Some(path), _) => Some(path.clone()),
        (None, ExportFormat::Js) => Some(project.docs.join(".vuepress").join("config.js")),
        (None, ExportFormat::Json) => None,
    }
}

pub fn export_config(project: &Project, args: &ExportArgs) -> Result<()> {
    let content = render(project, args)?;

    let Some(path) = target(project, args) else {
        let mut stdout = stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write '{}'", path.display()))?;
    log!("export"; "wrote {}", path.display());
    Ok(())
}
