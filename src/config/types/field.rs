//! Config field path used to point diagnostics at a node.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path to a config field or tree node.
///
/// Static sections are declared as constants, tree nodes are derived
/// from them by indexing:
///
/// ```ignore
/// const NAVBAR: FieldPath = FieldPath::new("theme.navbar");
///
/// NAVBAR.index(2).field("children").index(0); // theme.navbar[2].children[0]
/// SIDEBAR.key("/posts/").index(1);            // theme.sidebar."/posts/"[1]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Child field (`a.b`).
    pub fn field(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{name}", self.0)))
    }

    /// Quoted map key (`a."/posts/"`), for keys that are not bare identifiers.
    pub fn key(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.\"{key}\"", self.0)))
    }

    /// Sequence element (`a[3]`).
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
