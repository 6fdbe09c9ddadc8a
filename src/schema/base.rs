//! Deployment base path.

use std::fmt;
use thiserror::Error;

/// Path the site is served under, e.g. `/` or `/my-blog/` on a GitHub
/// Pages project site. Always starts and ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BaseUrlError {
    #[error("base is empty")]
    Empty,
    #[error("base must start with `/`")]
    MissingLeadingSlash,
    #[error("base must end with `/`")]
    MissingTrailingSlash,
    #[error("base must not contain whitespace")]
    Whitespace,
    #[error("base must not contain empty segments (`//`)")]
    EmptySegment,
}

impl BaseUrl {
    pub fn parse(s: &str) -> Result<Self, BaseUrlError> {
        if s.is_empty() {
            return Err(BaseUrlError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(BaseUrlError::Whitespace);
        }
        if !s.starts_with('/') {
            return Err(BaseUrlError::MissingLeadingSlash);
        }
        if !s.ends_with('/') {
            return Err(BaseUrlError::MissingTrailingSlash);
        }
        if s.contains("//") {
            return Err(BaseUrlError::EmptySegment);
        }
        Ok(Self(s.to_string()))
    }

    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Build from a URL path component, e.g. `my-blog` -> `/my-blog/`.
    pub fn from_url_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            Self::root()
        } else {
            Self(format!("/{}/", segments.join("/")))
        }
    }

    /// Closest valid base for a rejected value, used in fix hints.
    pub fn suggest(s: &str) -> String {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Self::from_url_path(&cleaned).0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
