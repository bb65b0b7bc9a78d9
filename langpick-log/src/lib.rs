//! Logging for langpick
//!
//! A small, environment-driven logger used by every langpick crate. Messages
//! go to stderr, one line per record.
//!
//! # Usage
//!
//! ```rust
//! use langpick_log::{debug, trace, warn};
//!
//! debug!("resolved language: {}", "fr");
//! trace!(target: "langpick::resolver", "entering state {}", "TryQuery");
//! warn!("duplicate supported tag dropped");
//! ```
//!
//! # Environment Variables
//!
//! - `LANGPICK_DEBUG=1` - shorthand for `LANGPICK_LOG_LEVEL=debug`
//! - `LANGPICK_LOG_LEVEL=trace|debug|info|warn|error|off` - minimum level
//! - `LANGPICK_LOG_FORMAT=json|compact|pretty` - line format (default `json`)
//! - `LANGPICK_LOG_TIMESTAMPS=0` - drop timestamps from non-JSON output

use once_cell::sync::Lazy;
use std::env;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Severity of a log record, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Disables all output.
    Off = 5,
}

impl Level {
    /// Upper-case name used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a level name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

/// Line format for emitted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `2026-01-01 12:00:00.000 DEBUG [target] message`
    Pretty,
    /// `12:00:00 D target: message`
    Compact,
    /// One JSON object per line
    Json,
}

impl FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Format::Pretty),
            "compact" => Ok(Format::Compact),
            "json" => Ok(Format::Json),
            _ => Err(()),
        }
    }
}

/// Logger settings, read once from the environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub format: Format,
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: Format::Json,
            timestamps: true,
        }
    }
}

impl LogConfig {
    /// Build the configuration from `LANGPICK_*` variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let debug = lookup("LANGPICK_DEBUG").is_some_and(|v| is_truthy(&v));

        let level = lookup("LANGPICK_LOG_LEVEL")
            .and_then(|v| v.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { defaults.level });

        let format = lookup("LANGPICK_LOG_FORMAT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.format);

        let timestamps = lookup("LANGPICK_LOG_TIMESTAMPS")
            .map(|v| is_truthy(&v))
            .unwrap_or(defaults.timestamps);

        Self {
            level,
            format,
            timestamps,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Sentinel meaning "not yet read from the environment".
const UNSET: u8 = u8::MAX;

static LEVEL: AtomicU8 = AtomicU8::new(UNSET);

static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Force the environment to be read now instead of on first use.
pub fn init() {
    Lazy::force(&CONFIG);
    let _ = LEVEL.compare_exchange(
        UNSET,
        CONFIG.level as u8,
        Ordering::SeqCst,
        Ordering::SeqCst,
    );
}

/// The active configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

/// Current minimum level.
pub fn current_level() -> Level {
    let raw = LEVEL.load(Ordering::Relaxed);
    if raw == UNSET {
        init();
        return Level::from_u8(LEVEL.load(Ordering::Relaxed));
    }
    Level::from_u8(raw)
}

/// Override the minimum level at runtime.
pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Whether a record at `level` would be written.
#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    level != Level::Off && level >= current_level()
}

/// Write one record. Called by the macros.
#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    if !is_level_enabled(level) {
        return;
    }

    let config = config();
    let line = match config.format {
        Format::Json => json_line(level, target, message),
        Format::Pretty => {
            let mut line = String::new();
            if config.timestamps {
                line.push_str(&chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f ").to_string());
            }
            line.push_str(&format!("{:5} [{}] {}", level.as_str(), target, message));
            line
        }
        Format::Compact => {
            let mut line = String::new();
            if config.timestamps {
                line.push_str(&chrono::Local::now().format("%H:%M:%S ").to_string());
            }
            let initial = level.as_str().chars().next().unwrap_or('?');
            line.push_str(&format!("{} {}: {}", initial, target, message));
            line
        }
    };

    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}", line);
}

#[cfg(feature = "json")]
fn json_line(level: Level, target: &str, message: &str) -> String {
    #[derive(serde::Serialize)]
    struct Record<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let record = Record {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    serde_json::to_string(&record).unwrap_or_else(|_| message.to_string())
}

#[cfg(not(feature = "json"))]
fn json_line(level: Level, target: &str, message: &str) -> String {
    format!(
        r#"{{"timestamp":"{}","level":"{}","target":{:?},"message":{:?}}}"#,
        chrono::Utc::now().to_rfc3339(),
        level.as_str(),
        target,
        message
    )
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:expr, target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($level) {
            $crate::log($level, $target, &format!($($arg)+));
        }
    };
    ($level:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($level) {
            $crate::log($level, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log at trace level.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::__log_at!($crate::Level::Trace, $($arg)+) };
}

/// Log at debug level.
///
/// ```rust
/// use langpick_log::debug;
///
/// let tag = "en-US";
/// debug!(target: "langpick::matcher", "loose match for {}", tag);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__log_at!($crate::Level::Debug, $($arg)+) };
}

/// Log at info level.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__log_at!($crate::Level::Info, $($arg)+) };
}

/// Log at warn level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::__log_at!($crate::Level::Warn, $($arg)+) };
}

/// Log at error level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__log_at!($crate::Level::Error, $($arg)+) };
}
