use openalgo::application::config::{Config, RateLimiterConfig};
use openalgo::constants::{DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECS};
use std::env;

#[test]
fn test_with_api_key_uses_defaults() {
    let config = Config::with_api_key("key", "http://127.0.0.1:5000");
    assert_eq!(config.credentials.api_key, "key");
    assert_eq!(config.rest_api.version, DEFAULT_API_VERSION);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.rate_limiter, RateLimiterConfig::default());
    assert_eq!(config.rest_api.base_url(), "http://127.0.0.1:5000/api/v1");
}

#[test]
fn test_builders_override_fields() {
    let config = Config::with_api_key("key", "https://algo.example.com/")
        .with_version("v2")
        .with_timeout(30)
        .with_rate_limiter(RateLimiterConfig {
            max_requests: 5,
            period_seconds: 2,
            burst_size: 1,
        });

    assert_eq!(config.rest_api.base_url(), "https://algo.example.com/api/v2");
    assert_eq!(config.rest_api.timeout, 30);
    assert_eq!(config.rate_limiter.max_requests, 5);
}

#[test]
fn test_config_new_reads_environment() {
    unsafe {
        env::set_var("OPENALGO_API_KEY", "env-key");
        env::set_var("OPENALGO_HOST", "http://10.0.0.5:5000");
        env::set_var("OPENALGO_TIMEOUT", "15");
        env::set_var("OPENALGO_RATE_LIMIT_MAX_REQUESTS", "3");
    }

    let config = Config::new();

    unsafe {
        env::remove_var("OPENALGO_API_KEY");
        env::remove_var("OPENALGO_HOST");
        env::remove_var("OPENALGO_TIMEOUT");
        env::remove_var("OPENALGO_RATE_LIMIT_MAX_REQUESTS");
    }

    assert_eq!(config.credentials.api_key, "env-key");
    assert_eq!(config.rest_api.base_url(), "http://10.0.0.5:5000/api/v1");
    assert_eq!(config.rest_api.timeout, 15);
    assert_eq!(config.rate_limiter.max_requests, 3);
}
