//! Supported language list
//!
//! The ordered set of tags a site can serve. The first tag is the default
//! returned when no client preference matches.

use crate::{LangpickError, Result};
use langpick_log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered, non-empty, duplicate-free list of supported language tags.
///
/// # Examples
///
/// ```
/// use langpick_core::SupportedLanguages;
///
/// let supported: SupportedLanguages = "en, fr".parse().unwrap();
/// assert_eq!(supported.default_tag(), "en");
/// assert_eq!(supported.len(), 2);
///
/// assert!("".parse::<SupportedLanguages>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SupportedSpec", into = "Vec<String>")]
pub struct SupportedLanguages {
    tags: Vec<String>,
}

impl SupportedLanguages {
    /// Build a list from individual tags.
    ///
    /// Tags are trimmed and blank ones skipped. A repeated tag keeps its
    /// first position. Fails when nothing is left or a tag cannot be a
    /// language tag.
    pub fn new<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept: Vec<String> = Vec::new();

        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() {
                continue;
            }
            validate_tag(tag)?;
            if kept.iter().any(|t| t == tag) {
                warn!("Duplicate supported language '{}' ignored", tag);
                continue;
            }
            kept.push(tag.to_string());
        }

        if kept.is_empty() {
            return Err(LangpickError::EmptySupportedList);
        }

        Ok(Self { tags: kept })
    }

    /// Parse a comma-separated list such as `en,fr`.
    pub fn parse(list: &str) -> Result<Self> {
        Self::new(list.split(','))
    }

    /// The fallback tag (first in the list).
    pub fn default_tag(&self) -> &str {
        // non-empty by construction
        &self.tags[0]
    }

    /// Tags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn validate_tag(tag: &str) -> Result<()> {
    let invalid = tag == "*" || tag.chars().any(|c| c.is_whitespace() || c == ',' || c == ';');
    if invalid {
        return Err(LangpickError::InvalidTag(tag.to_string()));
    }
    Ok(())
}

impl FromStr for SupportedLanguages {
    type Err = LangpickError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<String>> for SupportedLanguages {
    type Error = LangpickError;

    fn try_from(tags: Vec<String>) -> Result<Self> {
        Self::new(tags)
    }
}

impl From<SupportedLanguages> for Vec<String> {
    fn from(supported: SupportedLanguages) -> Self {
        supported.tags
    }
}

impl fmt::Display for SupportedLanguages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags.join(","))
    }
}

/// Accepted config shapes: `["en", "fr"]` or `"en,fr"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SupportedSpec {
    List(Vec<String>),
    Csv(String),
}

impl TryFrom<SupportedSpec> for SupportedLanguages {
    type Error = LangpickError;

    fn try_from(spec: SupportedSpec) -> Result<Self> {
        match spec {
            SupportedSpec::List(tags) => Self::new(tags),
            SupportedSpec::Csv(list) => Self::parse(&list),
        }
    }
}
