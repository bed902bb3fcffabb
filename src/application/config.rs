use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_HOST, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_or_default, get_first_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Credentials attached to every request
pub struct Credentials {
    /// OpenAlgo API key, sent as `apikey` in each payload
    pub api_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the OpenAlgo client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Server address, e.g. `http://127.0.0.1:5000`
    pub host: String,
    /// API version path segment, e.g. `v1`
    pub version: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for client-side request pacing
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl RestApiConfig {
    /// Base URL every endpoint path is appended to: `{host}/api/{version}`
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}/api/{}",
            self.host.trim_end_matches('/'),
            self.version.trim_matches('/')
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment (and `.env` if present)
    ///
    /// Recognised variables: `OPENALGO_API_KEY` (or `API_KEY`),
    /// `OPENALGO_HOST` (or `HOST_SERVER`), `OPENALGO_API_VERSION`,
    /// `OPENALGO_TIMEOUT`, `OPENALGO_RATE_LIMIT_MAX_REQUESTS`,
    /// `OPENALGO_RATE_LIMIT_PERIOD_SECONDS`, `OPENALGO_RATE_LIMIT_BURST_SIZE`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_first_env_or_default(
            &["OPENALGO_API_KEY", "API_KEY"],
            String::from("default_api_key"),
        );
        if api_key == "default_api_key" {
            error!("OPENALGO_API_KEY not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { api_key },
            rest_api: RestApiConfig {
                host: get_first_env_or_default(
                    &["OPENALGO_HOST", "HOST_SERVER"],
                    String::from(DEFAULT_HOST),
                ),
                version: get_env_or_default(
                    "OPENALGO_API_VERSION",
                    String::from(DEFAULT_API_VERSION),
                ),
                timeout: get_env_or_default("OPENALGO_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "OPENALGO_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "OPENALGO_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "OPENALGO_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
        }
    }

    /// Creates a configuration for an explicit key and host, ignoring the environment
    ///
    /// # Example
    /// ```
    /// use openalgo::application::config::Config;
    ///
    /// let config = Config::with_api_key("my-key", "http://127.0.0.1:5000/");
    /// assert_eq!(config.rest_api.base_url(), "http://127.0.0.1:5000/api/v1");
    /// ```
    pub fn with_api_key(api_key: impl Into<String>, host: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
            },
            rest_api: RestApiConfig {
                host: host.into(),
                version: String::from(DEFAULT_API_VERSION),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            rate_limiter: RateLimiterConfig::default(),
        }
    }

    /// Overrides the API version segment
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.rest_api.version = version.into();
        self
    }

    /// Overrides the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Overrides the rate limiter settings
    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiterConfig) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }
}
