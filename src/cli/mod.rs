//! Command-line interface module.

pub mod args;
pub mod check;
pub mod export;
pub mod import;
pub mod init;
pub mod show;

pub use args::{Cli, Commands};
