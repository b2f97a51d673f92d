//! Transport client for the Wunderlist REST API.
//!
//! [`Transport`] is the seam the aggregation talks to; [`ApiClient`] is the
//! reqwest implementation. One call is one GET, no retries.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::config::Config;
use crate::error::RequestError;

pub const LISTS_PATH: &str = "/api/v1/lists";

pub fn tasks_path(list_id: u64) -> String {
    format!("/api/v1/tasks?list_id={list_id}")
}

/// Something that can GET an API path and hand back its JSON body.
pub trait Transport: Send + Sync {
    /// Issue one GET for `path` (query string included).
    ///
    /// # Errors
    ///
    /// [`RequestError::InvalidRequest`] when the body carries an
    /// `invalid_request` marker, [`RequestError::Transport`] on network,
    /// timeout or JSON parse failure.
    fn get(&self, path: &str) -> impl Future<Output = Result<Value, RequestError>> + Send;
}

/// reqwest-backed [`Transport`] carrying the two identification headers.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    access_token: String,
    client_id: String,
}

impl ApiClient {
    /// Fails with [`RequestError::Other`] on an invalid config.
    pub fn new(config: &Config) -> Result<Self, RequestError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| RequestError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base: config.api_base.trim_end_matches('/').to_owned(),
            access_token: config.access_token.clone(),
            client_id: config.client_id.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Transport for ApiClient {
    async fn get(&self, path: &str) -> Result<Value, RequestError> {
        tracing::debug!(path, "GET");

        let response = self
            .http
            .get(self.url(path))
            .header("X-Access-Token", &self.access_token)
            .header("X-Client-ID", &self.client_id)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(path, %status, bytes = body.len(), "response received");
        parse_body(&body)
    }
}

pub fn parse_body(body: &str) -> Result<Value, RequestError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| RequestError::Transport(format!("malformed response: {e}")))?;
    if is_invalid_request(&value) {
        return Err(RequestError::InvalidRequest(value));
    }
    Ok(value)
}

/// True when `value` is an object whose `invalid_request` member is truthy.
pub fn is_invalid_request(value: &Value) -> bool {
    match value.get("invalid_request") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}
