//! Language Selector
//!
//! Stateless service tying a [`SelectorConfig`] to the resolver. Build one
//! at startup and share it across requests.

use crate::{
    PreferenceInputs, PreferenceSource, Resolution, Result, SelectorConfig, SupportedLanguages,
    resolve_detailed,
};

/// Selects the response language for requests.
///
/// # Example
///
/// ```
/// use langpick_core::{LanguageSelector, RequestParts};
///
/// let selector = LanguageSelector::from_args(&["en,fr"]).unwrap();
///
/// let request = RequestParts::new()
///     .with_query("lang", "fr-FR")
///     .with_header("Accept-Language", "en-US");
/// assert_eq!(selector.select(&request), "fr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSelector {
    config: SelectorConfig,
}

impl LanguageSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Build from expression arguments (`"en,fr"`, optional `"lang"`).
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        SelectorConfig::from_args(args).map(Self::new)
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn supported(&self) -> &SupportedLanguages {
        &self.config.supported
    }

    /// Name looked up in the query string and cookies.
    pub fn param_name(&self) -> &str {
        &self.config.param_name
    }

    /// Resolved tag for a request.
    pub fn select<R: PreferenceSource + ?Sized>(&self, request: &R) -> &str {
        self.select_detailed(request).tag
    }

    /// Resolution for a request, including the deciding source.
    pub fn select_detailed<R: PreferenceSource + ?Sized>(&self, request: &R) -> Resolution<'_> {
        let inputs = request.preference_inputs(self.param_name());
        self.resolve_inputs(&inputs)
    }

    /// Resolution for already collected preference strings.
    pub fn resolve_inputs(&self, inputs: &PreferenceInputs<'_>) -> Resolution<'_> {
        resolve_detailed(self.supported(), inputs)
    }
}

impl From<SelectorConfig> for LanguageSelector {
    fn from(config: SelectorConfig) -> Self {
        Self::new(config)
    }
}

/// One-shot resolution from the comma-separated supported list.
///
/// Returns an owned tag; fails only when the supported list is unusable.
///
/// ```
/// use langpick_core::resolve_language;
///
/// assert_eq!(resolve_language("en,fr", None, Some("en-US"), Some("en-US,fr")).unwrap(), "en");
/// assert!(resolve_language("", None, None, None).is_err());
/// ```
pub fn resolve_language(
    supported: &str,
    query: Option<&str>,
    cookie: Option<&str>,
    header: Option<&str>,
) -> Result<String> {
    let supported = SupportedLanguages::parse(supported)?;
    let inputs = PreferenceInputs::new(query, cookie, header);
    Ok(resolve_detailed(&supported, &inputs).tag.to_string())
}
