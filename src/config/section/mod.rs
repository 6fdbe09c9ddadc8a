//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitemark.toml`:
//!
//! | Module     | TOML Section   | Purpose                                  |
//! |------------|----------------|------------------------------------------|
//! | `site`     | `[site]`       | Title, description, base, lang, head     |
//! | `theme`    | `[theme]`      | Theme toggles, navbar, sidebar           |
//! | `markdown` | `[markdown]`   | Markdown rendering toggles               |
//! | `build`    | `[build]`      | Docs directory and bundler               |

pub mod build;
mod markdown;
pub mod site;
pub mod theme;

pub use build::{BuildSectionConfig, Bundler};
pub use markdown::MarkdownSectionConfig;
pub use site::{HeadEntry, SiteSectionConfig};
pub use theme::{NavItemSpec, SidebarGroupSpec, ThemeSectionConfig};
