//! Request Preference Sources
//!
//! The resolver only sees three optional strings. This module defines how a
//! host hands them over: implement [`PreferenceSource`] for your request type,
//! or fill a [`RequestParts`] from decoded query parameters and raw headers.

use crate::PreferenceInputs;
use std::collections::HashMap;

const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Retrieval hooks for the three preference strings of a request.
pub trait PreferenceSource {
    /// Decoded value of query parameter `name`.
    fn query(&self, name: &str) -> Option<&str>;

    /// Value of cookie `name`.
    fn cookie(&self, name: &str) -> Option<&str>;

    /// Value of the `Accept-Language` header, without the header name.
    fn accept_language(&self) -> Option<&str>;

    /// Collect the three strings, using `name` for both the query parameter
    /// and the cookie.
    fn preference_inputs(&self, name: &str) -> PreferenceInputs<'_> {
        PreferenceInputs::new(self.query(name), self.cookie(name), self.accept_language())
    }
}

/// Minimal request view: decoded query parameters plus raw headers.
///
/// Header names are stored lower-cased, so setting the same header twice
/// with different casing keeps the last value. Empty query and cookie values
/// count as not sent.
///
/// # Example
///
/// ```
/// use langpick_core::{PreferenceSource, RequestParts};
///
/// let request = RequestParts::new()
///     .with_header("Cookie", "session=abc; lang=fr-FR")
///     .with_header("accept-language", "de-DE,en;q=0.5");
///
/// assert_eq!(request.cookie("lang"), Some("fr-FR"));
/// assert_eq!(request.accept_language(), Some("de-DE,en;q=0.5"));
/// assert_eq!(request.query("lang"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    pub query_params: HashMap<String, String>,
    pub headers: HashMap<String, String>,
}

impl RequestParts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Header value by case-insensitive name.
    ///
    /// Entries written straight into `headers` should use lower-case names;
    /// other casings are still found but which one wins is unspecified.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .or_else(|| {
                self.headers
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
    }
}

impl PreferenceSource for RequestParts {
    fn query(&self, name: &str) -> Option<&str> {
        self.query_params
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        self.header("Cookie")
            .and_then(|cookies| find_cookie(cookies, name))
            .filter(|value| !value.is_empty())
    }

    fn accept_language(&self) -> Option<&str> {
        self.header(ACCEPT_LANGUAGE).map(strip_header_name)
    }
}

/// Look up one cookie in a `Cookie` header value (`a=1; b=2`).
///
/// The first cookie with the name wins.
pub fn find_cookie<'h>(cookie_header: &'h str, name: &str) -> Option<&'h str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"'))
}

/// Drop a leading `Accept-Language:` from a header value, if a host passed
/// the whole header line.
pub fn strip_header_name(value: &str) -> &str {
    let trimmed = value.trim_start();
    match trimmed.split_once(':') {
        Some((name, rest)) if name.trim().eq_ignore_ascii_case(ACCEPT_LANGUAGE) => rest.trim(),
        _ => value.trim(),
    }
}
