//! Framework-facing output of a [`SiteConfig`](crate::schema::SiteConfig).
//!
//! - [`value`]: the framework config object as JSON, and back
//! - [`module`]: the `.vuepress/config.js` entry module
//! - [`outline`]: a plain-text tree of navbar and sidebar

mod module;
mod outline;
mod value;

pub use module::config_module;
pub use outline::{outline, route_outline};
pub use value::{from_value, to_value};
