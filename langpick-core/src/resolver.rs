//! Source Resolution
//!
//! Picks one supported language from the three preference sources of a
//! request, highest priority first:
//!
//! 1. **Query**: an explicit per-request choice (`?lang=fr`)
//! 2. **Cookie**: a remembered choice
//! 3. **Header**: the browser's `Accept-Language`
//!
//! The first source that is *present* decides. If it matches nothing the
//! default language is returned; later sources are not consulted.

use crate::{MatchKind, SupportedLanguages, match_tag, parse_ranked};
use langpick_log::{debug, trace};
use std::fmt;

/// Where a preference string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Query,
    Cookie,
    Header,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Query => f.write_str("query"),
            Source::Cookie => f.write_str("cookie"),
            Source::Header => f.write_str("header"),
        }
    }
}

/// The raw preference strings of one request.
///
/// Any `Some` value is present, even an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceInputs<'a> {
    pub query: Option<&'a str>,
    pub cookie: Option<&'a str>,
    pub header: Option<&'a str>,
}

impl<'a> PreferenceInputs<'a> {
    pub fn new(query: Option<&'a str>, cookie: Option<&'a str>, header: Option<&'a str>) -> Self {
        Self {
            query,
            cookie,
            header,
        }
    }

    pub fn with_query(mut self, query: &'a str) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_cookie(mut self, cookie: &'a str) -> Self {
        self.cookie = Some(cookie);
        self
    }

    pub fn with_header(mut self, header: &'a str) -> Self {
        self.header = Some(header);
        self
    }

    /// The raw string for `source`, if present.
    pub fn get(&self, source: Source) -> Option<&'a str> {
        match source {
            Source::Query => self.query,
            Source::Cookie => self.cookie,
            Source::Header => self.header,
        }
    }
}

/// Outcome of a resolution, with the reason it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'s> {
    /// The selected tag, always a member of the supported list
    pub tag: &'s str,
    /// Source that was evaluated, `None` when every source was absent
    pub source: Option<Source>,
    /// How the tag was matched, `None` for the default tag
    pub kind: Option<MatchKind>,
}

impl Resolution<'_> {
    /// True when the default tag was returned.
    pub fn is_default(&self) -> bool {
        self.kind.is_none()
    }
}

/// Resolver states, visited in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    TryQuery,
    TryCookie,
    TryHeader,
    Fallback { evaluated: Option<Source> },
}

/// Resolve the language for one request.
///
/// # Example
///
/// ```
/// use langpick_core::{resolve, PreferenceInputs, SupportedLanguages};
///
/// let supported = SupportedLanguages::parse("en,fr").unwrap();
/// let inputs = PreferenceInputs::default()
///     .with_cookie("fr-FR")
///     .with_header("de-DE");
///
/// assert_eq!(resolve(&supported, &inputs), "fr");
/// ```
pub fn resolve<'s>(supported: &'s SupportedLanguages, inputs: &PreferenceInputs<'_>) -> &'s str {
    resolve_detailed(supported, inputs).tag
}

/// Resolve the language and report which source and match kind decided it.
pub fn resolve_detailed<'s>(
    supported: &'s SupportedLanguages,
    inputs: &PreferenceInputs<'_>,
) -> Resolution<'s> {
    let mut state = State::TryQuery;

    loop {
        trace!(target: "langpick::resolver", "state {:?}", state);

        let (source, next) = match state {
            // Query absent: try the cookie.
            State::TryQuery => (Source::Query, State::TryCookie),
            // Cookie absent: try the header.
            State::TryCookie => (Source::Cookie, State::TryHeader),
            // Header absent: nothing was sent at all.
            State::TryHeader => (Source::Header, State::Fallback { evaluated: None }),
            State::Fallback { evaluated } => {
                let tag = supported.default_tag();
                debug!(
                    target: "langpick::resolver",
                    "no preference matched ({}), using default '{}'",
                    evaluated.map_or("no source present".to_string(), |s| format!("{} unmatched", s)),
                    tag
                );
                return Resolution {
                    tag,
                    source: evaluated,
                    kind: None,
                };
            }
        };

        let Some(raw) = inputs.get(source) else {
            state = next;
            continue;
        };

        // A present source is final: on no match go straight to the
        // default, never on to the lower-priority sources.
        match match_tag(&parse_ranked(raw), supported) {
            Some(found) => {
                debug!(
                    target: "langpick::resolver",
                    "{} '{}' resolved to '{}' ({} match)",
                    source,
                    raw,
                    found.tag,
                    found.kind
                );
                return Resolution {
                    tag: found.tag,
                    source: Some(source),
                    kind: Some(found.kind),
                };
            }
            None => {
                state = State::Fallback {
                    evaluated: Some(source),
                };
            }
        }
    }
}
