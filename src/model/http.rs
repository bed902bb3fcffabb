/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Payload for endpoints that take nothing but the API key
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoPayload {}

/// Wraps an operation payload so that `apikey` is sent alongside its fields
#[derive(Serialize)]
struct Authenticated<'a, B> {
    apikey: &'a str,
    #[serde(flatten)]
    payload: &'a B,
}

/// HTTP layer shared by every service: URL building, API key injection,
/// pacing, and response checking
///
/// Every call maps to exactly one request; nothing is retried.
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl HttpClient {
    /// Creates a new HTTP layer from configuration
    ///
    /// # Returns
    /// * `Err(AppError::Network)` - if the underlying `reqwest` client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));

        Ok(Self {
            http_client,
            config: Arc::new(config),
            rate_limiter,
        })
    }

    /// Returns the configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full URL of an endpoint, e.g. `placeorder` becomes
    /// `http://127.0.0.1:5000/api/v1/placeorder`
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http") {
            return endpoint.to_string();
        }
        format!(
            "{}/{}",
            self.config.rest_api.base_url(),
            endpoint.trim_start_matches('/')
        )
    }

    /// Sends `payload` plus `apikey` as a JSON POST and decodes the response
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<T, AppError> {
        let value = self.post_value(endpoint, payload).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Same as [`HttpClient::post`] but returns the undecoded JSON body
    pub async fn post_value<B: Serialize>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<Value, AppError> {
        let url = self.endpoint_url(endpoint);
        let body = Authenticated {
            apikey: &self.config.credentials.api_key,
            payload,
        };
        let body = serde_json::to_value(&body)
            .map_err(|e| AppError::SerializationError(e.to_string()))?;

        let response = make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            Method::POST,
            &url,
            &[],
            Some(&body),
        )
        .await?;
        parse_response(response).await
    }

    /// Sends a GET with `apikey` and `query` as query parameters and decodes the response
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = self.endpoint_url(endpoint);
        let mut params: Vec<(&str, &str)> =
            vec![("apikey", self.config.credentials.api_key.as_str())];
        params.extend_from_slice(query);

        let response = make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            Method::GET,
            &url,
            &params,
            None,
        )
        .await?;
        let value = parse_response(response).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Issues one HTTP request after waiting on the rate limiter
///
/// Non-success statuses are mapped to [`AppError`] here; the body of a failed
/// response is logged and, when it carries a `message`, surfaced in
/// [`AppError::Api`].
pub async fn make_http_request(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    method: Method,
    url: &str,
    query: &[(&str, &str)],
    body: Option<&Value>,
) -> Result<Response, AppError> {
    {
        let limiter = rate_limiter.read().await;
        limiter.wait().await;
    }

    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header("Accept", "application/json");
    if !query.is_empty() {
        request = request.query(query);
    }
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body_text);
    Err(status_error(status, &body_text))
}

/// Maps a non-success status and its body to an [`AppError`]
pub fn status_error(status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized,
        StatusCode::NOT_FOUND => AppError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded,
        _ => match error_message(body) {
            Some(message) => AppError::Api { status, message },
            None => AppError::Unexpected(status),
        },
    }
}

/// Extracts the human readable message of an error body
///
/// JSON bodies yield their `message` (or `error`) field; any other non-empty
/// body is returned as is.
pub fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value
            .get("message")
            .or_else(|| value.get("error"))
            .map(|m| match m {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .or_else(|| Some(trimmed.to_string())),
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Decodes a successful response and rejects `"status": "error"` envelopes
async fn parse_response(response: Response) -> Result<Value, AppError> {
    let status = response.status();
    let text = response.text().await?;
    let value: Value = serde_json::from_str(&text)?;
    check_envelope(status, value)
}

/// Returns `value` unless it is an OpenAlgo error envelope
pub fn check_envelope(status: StatusCode, value: Value) -> Result<Value, AppError> {
    let is_error = value
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|s| s.eq_ignore_ascii_case("error"));
    if is_error {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        error!("API returned error envelope: {}", message);
        return Err(AppError::Api { status, message });
    }
    Ok(value)
}
