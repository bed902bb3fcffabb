use openalgo::application::client::Client;
use openalgo::application::config::{Config, RateLimiterConfig};
use openalgo::application::rate_limiter::RateLimiter;
use std::time::{Duration, Instant};

#[test]
fn test_client_exposes_config() {
    let client = Client::new(Config::with_api_key("key", "http://127.0.0.1:5000")).unwrap();
    assert_eq!(client.config().credentials.api_key, "key");

    let clone = client.clone();
    assert_eq!(clone.config().rest_api.base_url(), "http://127.0.0.1:5000/api/v1");
}

#[test]
fn test_client_debug_hides_api_key() {
    let client = Client::new(Config::with_api_key("secret-key", "http://127.0.0.1:5000")).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("http://127.0.0.1:5000/api/v1"));
    assert!(!debug.contains("secret-key"));
}

#[tokio::test]
async fn test_rate_limiter_allows_burst_then_paces() {
    let limiter = RateLimiter::new(&RateLimiterConfig {
        max_requests: 10,
        period_seconds: 1,
        burst_size: 2,
    });

    let start = Instant::now();
    limiter.wait().await;
    limiter.wait().await;
    assert!(start.elapsed() < Duration::from_millis(50));

    limiter.wait().await;
    assert!(start.elapsed() >= Duration::from_millis(50));
}
