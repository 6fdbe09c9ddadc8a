//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sitemark: navigation, sidebar and theme config for a VuePress blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitemark.toml)
    #[arg(short = 'C', long, global = true, default_value = "sitemark.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site from template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config that would be written instead of writing files
        #[arg(long)]
        dry: bool,

        /// Start from the complete example blog instead of the minimal starter
        #[arg(short, long)]
        example: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Validate the config and resolve every link against the docs directory
    #[command(visible_alias = "c")]
    Check {
        /// Report missing documents without failing
        #[arg(long, short = 'w')]
        warn_only: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Export the framework config object
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Convert a framework config object (JSON) into sitemark.toml
    Import {
        /// JSON file holding the object passed to `defineUserConfig`
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Overwrite an existing output file
        #[arg(long)]
        force: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Print the navbar and sidebar trees
    Show {
        /// Only print the sidebar displayed on this route (e.g. /posts/sticky.html)
        #[arg(short, long)]
        route: Option<String>,

        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Flags accepted by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Write output to file instead of the default target.
    ///
    /// json defaults to stdout, js to `<docs>/.vuepress/config.js`.
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// The config object as JSON
    #[default]
    Json,
    /// The `.vuepress/config.js` entry module
    Js,
}

impl Commands {
    pub const fn common(&self) -> &CommonArgs {
        match self {
            Self::Init { common, .. }
            | Self::Check { common, .. }
            | Self::Export { common, .. }
            | Self::Import { common, .. }
            | Self::Show { common, .. } => common,
        }
    }
}
