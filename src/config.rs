//! Process configuration, read from the environment once at start-up.

use std::fmt;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

/// Runtime configuration shared by the host and the chat gateway.
///
/// Built once in `main` and passed down by reference; nothing else in the
/// crate looks at the process environment.
#[derive(Clone)]
pub struct Config {
    /// Provider credential (`OPENAI_API_KEY`). Empty values count as absent.
    pub openai_api_key: Option<String>,
    /// Provider API base, without a trailing slash.
    pub openai_base_url: String,
    pub openai_model: String,
    pub port: u16,
    /// Label reported by the health probe (`APP_ENV`, then `NODE_ENV`).
    pub environment: String,
    /// Directory served for every non-API path.
    pub static_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build [`Config`] from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_base_url: non_empty("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: non_empty("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            port: non_empty("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment: non_empty("APP_ENV")
                .or_else(|| non_empty("NODE_ENV"))
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            static_dir: PathBuf::from(
                non_empty("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            log_filter: non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// The credential must never end up in a log line.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("static_dir", &self.static_dir)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}
