//! Plain-text outline of the navigation trees.
//!
//! ```text
//! navbar
//! ├── 首页 → /
//! └── 技术文章
//!     └── 学术研究
//!         ├── archive1 → /posts/archive1.md
//!         └── /posts/archive2.md
//!
//! sidebar /posts/
//! └── 📌 置顶文章
//!     ├── /posts/sticky.md
//!     └── /posts/sticky2.md
//! ```

use crate::schema::{NavEntry, SidebarGroup, SiteConfig};
use std::fmt::Write;

/// Navbar followed by every sidebar section, in author order.
pub fn outline(site: &SiteConfig) -> String {
    let mut out = String::new();
    writeln!(out, "{} {} ({})", site.title(), site.base(), site.lang()).ok();

    out.push_str("\nnavbar\n");
    write_nav(&mut out, site.navigation(), "");

    for (prefix, groups) in site.sidebar().iter() {
        writeln!(out, "\nsidebar {prefix}").ok();
        write_sidebar(&mut out, groups);
    }
    out
}

/// The sidebar displayed on `route`, or `None` when no prefix matches.
pub fn route_outline(site: &SiteConfig, route: &str) -> Option<String> {
    let (prefix, groups) = site.sidebar().resolve(route)?;
    let mut out = String::new();
    writeln!(out, "sidebar {prefix}").ok();
    write_sidebar(&mut out, groups);
    Some(out)
}

fn write_nav(out: &mut String, entries: &[NavEntry], indent: &str) {
    for (i, entry) in entries.iter().enumerate() {
        let last = i + 1 == entries.len();
        let branch = if last { "└── " } else { "├── " };
        match entry {
            NavEntry::Leaf {
                link,
                page_title: true,
                ..
            } => {
                writeln!(out, "{indent}{branch}{link}").ok();
            }
            NavEntry::Leaf { label, link, .. } => {
                writeln!(out, "{indent}{branch}{label} → {link}").ok();
            }
            NavEntry::Group { label, children } => {
                writeln!(out, "{indent}{branch}{label}").ok();
                let nested = format!("{indent}{}", if last { "    " } else { "│   " });
                write_nav(out, children, &nested);
            }
        }
    }
}

fn write_sidebar(out: &mut String, groups: &[SidebarGroup]) {
    for (i, group) in groups.iter().enumerate() {
        let last = i + 1 == groups.len();
        let (branch, nested) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        writeln!(out, "{branch}{}", group.heading()).ok();
        for (j, item) in group.items().iter().enumerate() {
            let leaf = if j + 1 == group.items().len() { "└── " } else { "├── " };
            writeln!(out, "{nested}{leaf}{item}").ok();
        }
    }
}
