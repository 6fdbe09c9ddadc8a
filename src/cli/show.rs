//! Outline printing.

use anyhow::{Result, bail};

use crate::config::Project;
use crate::render::{outline, route_outline};

pub fn show_outline(project: &Project, route: Option<&str>) -> Result<()> {
    let text = match route {
        None => outline(&project.site),
        Some(route) => match route_outline(&project.site, route) {
            Some(text) => text,
            None => bail!("no sidebar prefix matches route `{route}`"),
        },
    };
    print!("{text}");
    Ok(())
}
