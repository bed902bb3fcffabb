/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! TradingView-style strategy webhooks
//!
//! OpenAlgo strategies receive orders on `{host}/strategy/webhook/{id}`. The
//! strategy mode (long only, short only, both) is configured server-side; the
//! message only carries symbol, action and, for `BOTH` mode, the target
//! position size.

use crate::application::config::RateLimiterConfig;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::make_http_request;
use pretty_simple_display::DisplaySimple;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Webhook message body
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrategyMessage {
    /// Trading symbol, e.g. `RELIANCE`
    pub symbol: String,
    /// `BUY` or `SELL`
    pub action: String,
    /// Target position, required when the strategy trades both sides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_size: Option<String>,
}

/// Sends orders to one OpenAlgo strategy webhook
pub struct Strategy {
    host_url: String,
    webhook_id: String,
    webhook_url: String,
    http_client: reqwest::Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl Strategy {
    /// Creates a strategy handle, e.g. `Strategy::new("http://127.0.0.1:5000", "<webhook id>")`
    ///
    /// # Returns
    /// * `Err(AppError::Network)` - if the underlying `reqwest` client cannot be built
    pub fn new(
        host_url: impl Into<String>,
        webhook_id: impl Into<String>,
    ) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_http_client(host_url, webhook_id, http_client))
    }

    /// Creates a strategy handle sending through an existing `reqwest` client
    pub fn with_http_client(
        host_url: impl Into<String>,
        webhook_id: impl Into<String>,
        http_client: reqwest::Client,
    ) -> Self {
        let host_url = host_url.into().trim_end_matches('/').to_string();
        let webhook_id = webhook_id.into();
        let webhook_url = format!("{host_url}/strategy/webhook/{webhook_id}");
        Self {
            host_url,
            webhook_id,
            webhook_url,
            http_client,
            rate_limiter: Arc::new(RwLock::new(RateLimiter::new(&RateLimiterConfig::default()))),
        }
    }

    /// Server URL without trailing slash
    #[must_use]
    pub fn host_url(&self) -> &str {
        &self.host_url
    }

    /// Webhook id
    #[must_use]
    pub fn webhook_id(&self) -> &str {
        &self.webhook_id
    }

    /// Full webhook URL
    #[must_use]
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Builds the message for one signal; `action` is upper-cased
    #[must_use]
    pub fn order_message(
        &self,
        symbol: &str,
        action: &str,
        position_size: Option<i64>,
    ) -> StrategyMessage {
        StrategyMessage {
            symbol: symbol.to_string(),
            action: action.to_uppercase(),
            position_size: position_size.map(|p| p.to_string()),
        }
    }

    /// Posts a signal to the webhook and returns the server's reply
    ///
    /// JSON replies are returned as is; any other body is returned as a JSON
    /// string.
    pub async fn strategy_order(
        &self,
        symbol: &str,
        action: &str,
        position_size: Option<i64>,
    ) -> Result<Value, AppError> {
        let message = self.order_message(symbol, action, position_size);
        info!(
            "Sending strategy signal: {} {} {:?}",
            message.action, message.symbol, message.position_size
        );
        let body = serde_json::to_value(&message)
            .map_err(|e| AppError::SerializationError(e.to_string()))?;

        let response = make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            Method::POST,
            &self.webhook_url,
            &[],
            Some(&body),
        )
        .await?;
        let text = response.text().await?;
        debug!("Webhook replied: {}", text);
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy")
            .field("webhook_url", &self.webhook_url)
            .finish()
    }
}
