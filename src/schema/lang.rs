//! Site language tag.

use std::fmt;
use thiserror::Error;

/// BCP 47 style language tag (`en`, `en-US`, `zh-CN`, `zh-Hans`).
///
/// Only the shape is checked: a 2-8 letter primary subtag followed by
/// 1-8 character alphanumeric subtags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a valid language tag")]
pub struct InvalidLanguageTag(pub String);

impl LanguageTag {
    pub fn parse(s: &str) -> Result<Self, InvalidLanguageTag> {
        let mut subtags = s.split('-');
        let primary = subtags.next().unwrap_or_default();

        let primary_ok =
            (2..=8).contains(&primary.len()) && primary.bytes().all(|b| b.is_ascii_alphabetic());
        let rest_ok = subtags
            .all(|tag| (1..=8).contains(&tag.len()) && tag.bytes().all(|b| b.is_ascii_alphanumeric()));

        if primary_ok && rest_ok {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidLanguageTag(s.to_string()))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self("en-US".to_string())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
