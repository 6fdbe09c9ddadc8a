//! Check report types and formatting.

use indexmap::IndexMap;
use std::fmt;
use std::path::Path;

use owo_colors::OwoColorize;

use crate::utils::{plural_count, plural_s};

/// A link with no document behind it.
#[derive(Debug, Clone)]
pub struct MissingDocument {
    /// The link as written.
    pub target: String,
    /// Files that were tried.
    pub tried: Vec<String>,
}

/// Missing documents grouped by where the link was written.
///
/// Sources keep the order they were first reported in.
#[derive(Debug, Default)]
pub struct CheckReport {
    sources: IndexMap<String, Vec<MissingDocument>>,
}

impl CheckReport {
    pub fn add(&mut self, source: impl Into<String>, target: impl Into<String>, tried: &[impl AsRef<Path>]) {
        self.sources
            .entry(source.into())
            .or_default()
            .push(MissingDocument {
                target: target.into(),
                tried: tried
                    .iter()
                    .map(|p| p.as_ref().to_string_lossy().into_owned())
                    .collect(),
            });
    }

    /// Count of sources with missing documents.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Total missing document count.
    pub fn error_count(&self) -> usize {
        self.sources.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn sources(&self) -> impl Iterator<Item = (&str, &[MissingDocument])> {
        self.sources.iter().map(|(s, m)| (s.as_str(), m.as_slice()))
    }

    /// Print the full report to stderr.
    pub fn print(&self) {
        if self.is_empty() {
            return;
        }
        eprintln!();

        let source_count = self.source_count();
        let error_count = self.error_count();
        eprintln!(
            "{} {}",
            "missing".red().bold(),
            format!(
                "({source_count} source{}, {})",
                plural_s(source_count),
                plural_count(error_count, "document")
            )
            .dimmed()
        );

        for (source, missing) in self.sources() {
            eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
            for m in missing {
                let detail = if m.tried.is_empty() {
                    "(outside the docs directory)".to_string()
                } else {
                    format!("(tried {})", m.tried.join(", "))
                };
                eprintln!("{} {} {}", "→".red(), m.target, detail.dimmed());
            }
        }
        eprintln!();
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();

        if total == 0 {
            write!(f, "{}", "all links resolved".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("missing document{}", plural_s(total)).dimmed()
            )
        }
    }
}
