//! Error types for language resolution setup

use thiserror::Error;

/// Errors raised while building a supported-language list or loading a
/// selector configuration.
///
/// Resolving a language never fails: malformed preference strings and
/// unmatched preferences are normal outcomes, not errors.
#[derive(Debug, Error)]
pub enum LangpickError {
    /// No supported language was given
    #[error("Supported language list is empty")]
    EmptySupportedList,

    /// A supported tag that cannot stand for a language
    #[error("Invalid supported language tag: {0:?}")]
    InvalidTag(String),

    /// Bad expression arguments or config document contents
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}
