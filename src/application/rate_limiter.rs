/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Client-side request pacing
//!
//! A `governor` token bucket shared by every request issued through one
//! client. It only delays requests; it never retries or drops them.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket limiting how fast a client sends requests
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// One token is replenished every `period_seconds / max_requests`; at most
    /// `burst_size` tokens accumulate. Zero values fall back to one request per
    /// period and a burst of one.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let limiter = GovernorRateLimiter::direct(Self::quota(config));
        Self {
            limiter: Arc::new(limiter),
        }
    }

    fn quota(config: &RateLimiterConfig) -> Quota {
        let period = Duration::from_secs(config.period_seconds.max(1));
        let max_requests = config.max_requests.max(1);
        let replenish = (period / max_requests).max(Duration::from_millis(1));
        let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);

        match Quota::with_period(replenish) {
            Some(quota) => quota.allow_burst(burst),
            None => Quota::per_second(NonZeroU32::MIN).allow_burst(burst),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Takes a token if one is available right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
