//! Selector configuration
//!
//! A selector needs the supported language list and the name used for both
//! the query parameter and the cookie. Both can come from expression
//! arguments, environment variables, or a TOML file.

use crate::{LangpickError, Result, SupportedLanguages};
use langpick_log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Name used for the query parameter and cookie when none is configured.
pub const DEFAULT_PARAM_NAME: &str = "lang";

/// Environment variable prefix used by [`SelectorConfig::from_env`].
pub const DEFAULT_ENV_PREFIX: &str = "LANGPICK";

/// Configuration of a [`LanguageSelector`](crate::LanguageSelector).
///
/// # TOML
///
/// ```toml
/// supported = ["en", "fr"]   # or "en,fr"
/// param = "lang"             # optional
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Languages the site serves; the first one is the default
    pub supported: SupportedLanguages,
    /// Query parameter and cookie name
    #[serde(rename = "param", default = "default_param_name")]
    pub param_name: String,
}

fn default_param_name() -> String {
    DEFAULT_PARAM_NAME.to_string()
}

impl SelectorConfig {
    /// Config with the default parameter name.
    pub fn new(supported: SupportedLanguages) -> Self {
        Self {
            supported,
            param_name: default_param_name(),
        }
    }

    /// Override the query parameter and cookie name. A blank name keeps
    /// the current one.
    pub fn with_param_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.param_name = name.trim().to_string();
        }
        self
    }

    /// Build from expression arguments: the comma-separated supported list,
    /// then an optional parameter name.
    ///
    /// ```
    /// use langpick_core::SelectorConfig;
    ///
    /// let config = SelectorConfig::from_args(&["en,fr"]).unwrap();
    /// assert_eq!(config.param_name, "lang");
    ///
    /// let config = SelectorConfig::from_args(&["en,fr", "locale"]).unwrap();
    /// assert_eq!(config.param_name, "locale");
    ///
    /// assert!(SelectorConfig::from_args::<&str>(&[]).is_err());
    /// ```
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [] => Err(LangpickError::EmptySupportedList),
            [supported] => Ok(Self::new(SupportedLanguages::parse(supported.as_ref())?)),
            [supported, name] => Ok(
                Self::new(SupportedLanguages::parse(supported.as_ref())?).with_param_name(name.as_ref()),
            ),
            _ => Err(LangpickError::Config(format!(
                "expected at most 2 arguments (supported languages, parameter name), got {}",
                args.len()
            ))),
        }
    }

    /// Load from `LANGPICK_SUPPORTED` and `LANGPICK_PARAM`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Load from `<PREFIX>_SUPPORTED` (required) and `<PREFIX>_PARAM`.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        Self::from_lookup(prefix, |key| env::var(key))
    }

    fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, env::VarError>,
    {
        let supported_key = env_key(prefix, "SUPPORTED");
        let supported = match lookup(&supported_key) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => {
                return Err(LangpickError::Config(format!("{} is not set", supported_key)));
            }
            Err(e) => return Err(e.into()),
        };

        let mut config = Self::new(SupportedLanguages::parse(&supported)?);
        match lookup(&env_key(prefix, "PARAM")) {
            Ok(name) => config = config.with_param_name(name),
            Err(env::VarError::NotPresent) => {}
            Err(e) => return Err(e.into()),
        }

        info!(
            "Loaded language selector from environment: supported={}, param={}",
            config.supported, config.param_name
        );
        Ok(config)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.validate()?;
        config.param_name = config.param_name.trim().to_string();
        Ok(config)
    }

    /// Load a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading language selector config from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(
            "Loaded language selector from {}: supported={}, param={}",
            path.display(),
            config.supported,
            config.param_name
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.param_name.trim().is_empty() {
            return Err(LangpickError::Config("param must not be empty".to_string()));
        }
        Ok(())
    }
}

fn env_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}_{}", prefix.trim_end_matches('_'), key)
    }
}
