//! Configuration loading and constants.
//!
//! Reads application configuration from environment variables once at startup
//! into an immutable `Config`, and defines constants for variable names,
//! defaults, and HTTP cache headers. Missing values are recorded rather than
//! defaulted into presence so the health check can report them.

use const_format::formatcp;
use tracing::Level;

// =============================================================================
// Environment Variables
// =============================================================================

/// Log level name ("trace", "debug", "info", "warning", "error", "critical")
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Log output format ("text" or "json")
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
/// Greeting returned verbatim by `GET /`
pub const ENV_GREETING_MESSAGE: &str = "GREETING_MESSAGE";
/// Version string returned by `GET /version`
pub const ENV_APP_VERSION: &str = "APP_VERSION";
/// Deployment environment name reported by `GET /health`
pub const ENV_ENVIRONMENT: &str = "ENV";

// =============================================================================
// Defaults
// =============================================================================

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Environment name used when ENV is not set
pub const DEFAULT_ENVIRONMENT: &str = "development";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Content responses are fresh random draws and health must stay fresh for
// probes, so both groups are marked no-store. The version string is stable
// for the process lifetime and may be cached briefly.

/// Version responses - stable until the process restarts
pub const HTTP_CACHE_VERSION_MAX_AGE: u32 = 300;

pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

pub const CACHE_CONTROL_VERSION: &str =
    formatcp!("public, max-age={}", HTTP_CACHE_VERSION_MAX_AGE);

/// Application configuration, read from the environment once at startup and
/// immutable afterward. Handlers receive it through
/// [`AppState`](crate::state::AppState); nothing re-reads the environment at
/// request time.
///
/// Required variables that are absent (an empty value counts as absent) do not
/// fail startup; they surface through the `/health` endpoint's `env_vars`
/// check.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: Option<String>,
    pub log_format: String,
    pub greeting: Option<String>,
    pub version: Option<String>,
    pub environment: String,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            log_level: read_non_empty(ENV_LOG_LEVEL),
            log_format: read_non_empty(ENV_LOG_FORMAT)
                .unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string()),
            greeting: read_non_empty(ENV_GREETING_MESSAGE),
            version: read_non_empty(ENV_APP_VERSION),
            environment: read_non_empty(ENV_ENVIRONMENT)
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        }
    }

    /// Maps the configured level name to a tracing severity.
    ///
    /// Names are matched case-insensitively; "warning" and "critical" are
    /// accepted alongside the native tracing names. Unrecognized or absent
    /// names fall back to `INFO`.
    pub fn log_severity(&self) -> Level {
        match self
            .log_level
            .as_deref()
            .map(|name| name.to_ascii_lowercase())
            .as_deref()
        {
            Some("trace") => Level::TRACE,
            Some("debug") => Level::DEBUG,
            Some("info") => Level::INFO,
            Some("warn") | Some("warning") => Level::WARN,
            Some("error") | Some("critical") => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// Builds the env-filter directive derived from `LOG_LEVEL`.
    pub fn log_filter(&self) -> String {
        format!(
            "phasefacts={},tower_http=info",
            self.log_severity().to_string().to_ascii_lowercase()
        )
    }

    /// Names of required variables that were absent or empty at startup.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.log_level.is_none() {
            missing.push(ENV_LOG_LEVEL);
        }
        if self.greeting.is_none() {
            missing.push(ENV_GREETING_MESSAGE);
        }
        if self.version.is_none() {
            missing.push(ENV_APP_VERSION);
        }
        missing
    }
}

/// Reads a variable, treating empty values as absent.
fn read_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
