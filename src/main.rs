//! sitemark - navigation, sidebar and theme config for a VuePress blog.

#![allow(dead_code)]

mod cli;
mod config;
mod embed;
mod logger;
mod render;
mod schema;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Project;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.command.common().verbose);

    match &cli.command {
        Commands::Init { name, dry, example, .. } => {
            cli::init::new_site(name.as_deref(), *dry, *example)
        }
        Commands::Check { warn_only, .. } => {
            cli::check::check_project(&Project::load(&cli.config)?, *warn_only)
        }
        Commands::Export { args, .. } => {
            cli::export::export_config(&Project::load(&cli.config)?, args)
        }
        Commands::Import {
            input,
            output,
            force,
            ..
        } => cli::import::import_config(input, output.as_deref(), *force),
        Commands::Show { route, .. } => {
            cli::show::show_outline(&Project::load(&cli.config)?, route.as_deref())
        }
    }
}
