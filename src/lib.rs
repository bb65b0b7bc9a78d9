// langpick - preferred language resolution for HTTP requests
//
// Chooses one language from a fixed supported list using the query
// parameter, cookie and Accept-Language header of a request.

// Re-export core functionality
pub use langpick_core::*;

// Logging macros and configuration
pub use langpick_log;

/// Initialize logging from `LANGPICK_*` environment variables.
///
/// Optional; logging initializes itself on first use.
pub fn init_logging() {
    langpick_log::init();
}

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        LangpickError, LanguageSelector, MatchKind, PreferenceInputs, PreferenceSource,
        RequestParts, Resolution, Result, SelectorConfig, Source, SupportedLanguages, resolve,
        resolve_detailed, resolve_language,
    };
}
