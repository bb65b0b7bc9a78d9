//! Preferred Language Resolution
//!
//! Picks one language from a site's supported list for a request, using up
//! to three `Accept-Language` formatted preference strings:
//!
//! - **Query**: explicit per-request choice, e.g. `?lang=fr`
//! - **Cookie**: a remembered choice, e.g. `lang=fr-FR`
//! - **Header**: the browser's `Accept-Language`
//!
//! Each string is parsed into weighted tags, ranked by weight, and matched
//! against the supported list: exact matches first, then loose matches where
//! one tag contains the other (`en` / `en-US`). The first source present in
//! the request decides; when it matches nothing, or nothing was sent, the
//! first supported language is used.
//!
//! # Quick Start
//!
//! ```rust
//! use langpick_core::{resolve, PreferenceInputs, SupportedLanguages};
//!
//! let supported = SupportedLanguages::parse("en,fr")?;
//! let inputs = PreferenceInputs::default().with_header("en-US,fr");
//!
//! // `fr` matches exactly, which beats the loose `en-US` / `en` match
//! assert_eq!(resolve(&supported, &inputs), "fr");
//! # Ok::<(), langpick_core::LangpickError>(())
//! ```
//!
//! # Serving Requests
//!
//! ```rust
//! use langpick_core::{LanguageSelector, RequestParts};
//!
//! let selector = LanguageSelector::from_args(&["en,fr", "lang"])?;
//! let request = RequestParts::new().with_header("Cookie", "lang=fr-FR");
//!
//! assert_eq!(selector.select(&request), "fr");
//! # Ok::<(), langpick_core::LangpickError>(())
//! ```

mod config;
mod error;
mod matcher;
mod preference;
mod request;
mod resolver;
mod selector;
mod supported;

pub use config::{DEFAULT_ENV_PREFIX, DEFAULT_PARAM_NAME, SelectorConfig};
pub use error::LangpickError;
pub use matcher::{MatchKind, TagMatch, is_loose_match, match_tag};
pub use preference::{PreferenceEntry, parse_preferences, parse_ranked, rank_preferences};
pub use request::{PreferenceSource, RequestParts, find_cookie, strip_header_name};
pub use resolver::{PreferenceInputs, Resolution, Source, resolve, resolve_detailed};
pub use selector::{LanguageSelector, resolve_language};
pub use supported::SupportedLanguages;

/// Result type for langpick operations
pub type Result<T> = std::result::Result<T, LangpickError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        LangpickError, LanguageSelector, PreferenceInputs, PreferenceSource, RequestParts,
        Resolution, Result, SelectorConfig, Source, SupportedLanguages, resolve,
    };
}
