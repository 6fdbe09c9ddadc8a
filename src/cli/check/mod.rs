//! Content check command.
//!
//! # Module Structure
//!
//! - [`resolve`]: link to markdown file mapping
//! - [`report`]: missing document report

mod report;
pub mod resolve;

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::config::Project;
use crate::schema::{NavEntry, SiteConfig};
use crate::utils::{path::label_from_path, plural_count};
use crate::{debug, log};

use report::CheckReport;
use resolve::{Resolution, resolve};

/// A link written in the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLink<'a> {
    /// `navbar` or `sidebar <prefix>`.
    pub source: String,
    pub label: String,
    pub link: &'a str,
}

/// Every navbar and sidebar link, navbar first, in author order.
pub fn site_links(site: &SiteConfig) -> Vec<SiteLink<'_>> {
    let mut links = Vec::new();
    collect_nav(site.navigation(), &mut links);

    for (prefix, groups) in site.sidebar().iter() {
        let source = format!("sidebar {prefix}");
        for item in groups.iter().flat_map(|g| g.items()) {
            links.push(SiteLink {
                source: source.clone(),
                label: label_from_path(item),
                link: item,
            });
        }
    }
    links
}

fn collect_nav<'a>(entries: &'a [NavEntry], links: &mut Vec<SiteLink<'a>>) {
    for entry in entries {
        match entry {
            NavEntry::Leaf { label, link, .. } => links.push(SiteLink {
                source: "navbar".to_string(),
                label: label.clone(),
                link,
            }),
            NavEntry::Group { children, .. } => collect_nav(children, links),
        }
    }
}

/// Resolve every internal link against the docs directory.
pub fn check_project(project: &Project, warn_only: bool) -> Result<()> {
    if !project.docs.is_dir() {
        bail!(
            "docs directory '{}' not found, set `[build] docs` in {}",
            project.docs.display(),
            project.config_path.display()
        );
    }

    let links = site_links(&project.site);
    log!("check"; "resolving {} in {}", plural_count(links.len(), "link"), project.docs.display());

    let report = build_report(project, &links);

    if report.is_empty() {
        log!("check"; "{}", report);
        return Ok(());
    }

    report.print();
    let summary = format!(
        "{} referenced from {}",
        plural_count(report.error_count(), "missing document"),
        plural_count(report.source_count(), "source")
    );
    if warn_only {
        log!("warning"; "{}", summary);
        Ok(())
    } else {
        bail!("found {}", summary)
    }
}

fn build_report(project: &Project, links: &[SiteLink<'_>]) -> CheckReport {
    let mut report = CheckReport::default();
    for link in links {
        match resolve(&project.docs, link.link) {
            Resolution::Found(path) => {
                debug!("check"; "{} -> {}", link.link, path.display());
            }
            Resolution::External => {
                debug!("check"; "skipping external link {}", link.link);
            }
            Resolution::Missing(tried) => report.add(link.source.clone(), link.link, &tried),
            Resolution::OutsideDocs => {
                report.add(link.source.clone(), link.link, &[] as &[PathBuf]);
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_FILE, test_parse_config};
    use std::fs;
    use tempfile::TempDir;

    const LINKS: &str = r#"
[[theme.navbar]]
text = "首页"
link = "/"

[[theme.navbar]]
text = "技术文章"
children = [{ text = "学术研究", children = ["/posts/archive1.md"] }]

[[theme.navbar]]
text = "GitHub"
link = "https://github.com"

[theme.sidebar]
"/posts/" = [{ text = "📌 置顶文章", children = ["/posts/sticky.md", "/posts/archive1.md"] }]
"#;

    fn project(temp: &TempDir) -> Project {
        let config_path = temp.path().join(CONFIG_FILE);
        fs::write(&config_path, "").unwrap();
        fs::create_dir_all(temp.path().join("docs/posts")).unwrap();
        Project::from_file(&config_path, &test_parse_config(LINKS)).unwrap()
    }

    #[test]
    fn test_site_links() {
        let site = test_parse_config(LINKS).to_site().unwrap();
        let links: Vec<_> = site_links(&site)
            .into_iter()
            .map(|l| (l.source, l.label, l.link))
            .collect();
        assert_eq!(links[0], ("navbar".to_string(), "首页".to_string(), "/"));
        assert_eq!(links[1].1, "archive1");
        assert_eq!(links[2].2, "https://github.com");
        assert_eq!(links[3], ("sidebar /posts/".to_string(), "sticky".to_string(), "/posts/sticky.md"));
        assert_eq!(links.len(), 5);
    }

    #[test]
    fn test_report_groups_missing_by_source() {
        let temp = TempDir::new().unwrap();
        let project = project(&temp);
        fs::write(temp.path().join("docs/README.md"), "# Home").unwrap();

        let report = build_report(&project, &site_links(&project.site));
        let sources: Vec<_> = report.sources().map(|(s, m)| (s, m.len())).collect();
        assert_eq!(sources, [("navbar", 1), ("sidebar /posts/", 2)]);
        assert!(check_project(&project, false).is_err());
        assert!(check_project(&project, true).is_ok());
    }

    #[test]
    fn test_all_links_resolved() {
        let temp = TempDir::new().unwrap();
        let project = project(&temp);
        for doc in ["README.md", "posts/archive1.md", "posts/sticky.md"] {
            fs::write(project.docs.join(doc), "# doc").unwrap();
        }
        assert!(build_report(&project, &site_links(&project.site)).is_empty());
        assert!(check_project(&project, false).is_ok());
    }

    #[test]
    fn test_link_outside_docs_is_missing() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/README.md"), "# Home").unwrap();
        fs::write(temp.path().join("secret.md"), "# Secret").unwrap();
        let file = test_parse_config(
            "[[theme.navbar]]\ntext = \"首页\"\nlink = \"/\"\n\n\
             [[theme.navbar]]\ntext = \"秘密\"\nlink = \"/../secret.md\"",
        );
        let project = Project::from_file(&config_path, &file).unwrap();

        let report = build_report(&project, &site_links(&project.site));
        let (source, missing) = report.sources().next().unwrap();
        assert_eq!(source, "navbar");
        assert_eq!(missing[0].target, "/../secret.md");
        assert!(missing[0].tried.is_empty());
        assert!(check_project(&project, false).is_err());
    }

    #[test]
    fn test_missing_docs_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        let project = Project::from_file(&config_path, &test_parse_config("")).unwrap();
        let err = check_project(&project, true).unwrap_err();
        assert!(err.to_string().contains("docs directory"));
    }
}
