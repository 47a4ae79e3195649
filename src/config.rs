use std::time::Duration;

use serde::Deserialize;

/// Default base URL for the crates.io crate endpoint
pub const DEFAULT_REGISTRY_URL: &str = "https://crates.io/api/v1/crates";

/// Base URL used to synthesize a documentation link when the crate has none
pub const DOCS_BASE_URL: &str = "https://docs.rs";

/// Timeout for the registry request in milliseconds (10 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 10_000;

/// crates.io rejects requests without an identifying User-Agent.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding the registry base URL
pub const REGISTRY_ENV: &str = "CRATE_VERSION_REGISTRY";

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "CRATE_VERSION_LOG_FORMAT";

/// Settings for a single registry lookup
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupConfig {
    /// Base URL the crate name is appended to
    pub registry_url: String,
    pub user_agent: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl LookupConfig {
    /// Resolves the configuration from a command-line override, then
    /// $CRATE_VERSION_REGISTRY, then the built-in defaults.
    pub fn resolve(registry_flag: Option<String>) -> Self {
        Self::resolve_with_env(registry_flag, std::env::var(REGISTRY_ENV).ok())
    }

    fn resolve_with_env(registry_flag: Option<String>, registry_env: Option<String>) -> Self {
        let registry_url = registry_flag
            .or(registry_env)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());

        Self {
            registry_url,
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Returns the log format selected by $CRATE_VERSION_LOG_FORMAT.
pub fn log_format() -> LogFormat {
    log_format_with_env(std::env::var(LOG_FORMAT_ENV).ok())
}

fn log_format_with_env(value: Option<String>) -> LogFormat {
    match value.as_deref().map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}
