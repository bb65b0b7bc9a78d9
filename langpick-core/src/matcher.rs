//! Matching ranked preferences against the supported list.

use crate::{PreferenceEntry, SupportedLanguages};
use std::fmt;

/// How a supported tag was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Preference and supported tag are identical
    Exact,
    /// One tag contains the other (`en` and `en-US`)
    Loose,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Exact => f.write_str("exact"),
            MatchKind::Loose => f.write_str("loose"),
        }
    }
}

/// A supported tag selected for a preference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'s> {
    pub tag: &'s str,
    pub kind: MatchKind,
}

/// Whether two tags are loosely related: either is a substring of the other.
///
/// This approximates the primary-subtag relation (`en` / `en-US`) without
/// parsing tags, and can relate unrelated tags when one happens to contain
/// the other.
pub fn is_loose_match(preferred: &str, supported: &str) -> bool {
    supported.contains(preferred) || preferred.contains(supported)
}

/// Find the supported tag for a ranked preference list.
///
/// Every entry is tried for an exact match before any entry is tried for a
/// loose one. Within a phase the client's order wins over the supported
/// list's order. Returns `None` when nothing matches.
///
/// # Example
///
/// ```
/// use langpick_core::{match_tag, parse_ranked, MatchKind, SupportedLanguages};
///
/// let supported = SupportedLanguages::parse("en,fr").unwrap();
///
/// let found = match_tag(&parse_ranked("en-US,fr"), &supported).unwrap();
/// assert_eq!((found.tag, found.kind), ("fr", MatchKind::Exact));
///
/// let found = match_tag(&parse_ranked("en-US"), &supported).unwrap();
/// assert_eq!((found.tag, found.kind), ("en", MatchKind::Loose));
///
/// assert!(match_tag(&parse_ranked("de-DE"), &supported).is_none());
/// ```
pub fn match_tag<'s>(
    ranked: &[PreferenceEntry<'_>],
    supported: &'s SupportedLanguages,
) -> Option<TagMatch<'s>> {
    find_in_phase(ranked, supported, MatchKind::Exact)
        .or_else(|| find_in_phase(ranked, supported, MatchKind::Loose))
}

fn find_in_phase<'s>(
    ranked: &[PreferenceEntry<'_>],
    supported: &'s SupportedLanguages,
    kind: MatchKind,
) -> Option<TagMatch<'s>> {
    ranked.iter().find_map(|entry| {
        supported
            .iter()
            .find(|candidate| match kind {
                MatchKind::Exact => entry.tag == *candidate,
                MatchKind::Loose => is_loose_match(entry.tag, candidate),
            })
            .map(|tag| TagMatch { tag, kind })
    })
}
