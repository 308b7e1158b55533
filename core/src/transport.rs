//! Authenticated form POST transport.
//!
//! # Design
//! `Transport` is immutable after construction and can be cloned or shared
//! between threads; every call builds its own request. The exchange is split
//! the same way as the executor seam: `build_request` and `parse_response`
//! are pure, `send` wires them around an `HttpExecutor` with retry.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::JsonObject;
use crate::error::{CufError, Result};
use crate::form;
use crate::http::{HttpExecutor, HttpRequest, HttpResponse, UreqExecutor};
use crate::retry::{retry_with_backoff, RetryPolicy};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const USER_AGENT: &str = concat!("cufinder-rust/", env!("CARGO_PKG_VERSION"));

/// Shared handle for sending requests to the CUFinder API.
#[derive(Clone)]
pub struct Transport {
    api_key: String,
    base_url: String,
    retry: RetryPolicy,
    executor: Arc<dyn HttpExecutor>,
}

impl Transport {
    /// Transport backed by a `ureq` agent using the configured timeout.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_executor(config, Arc::new(UreqExecutor::new(config.timeout)))
    }

    /// Transport that delegates the HTTP exchange to `executor`.
    pub fn with_executor(config: &ClientConfig, executor: Arc<dyn HttpExecutor>) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::with_max_retries(config.max_retries),
            executor,
        }
    }

    /// Replace the retry policy derived from `max_retries`.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Encode `params` into a form POST for `path`.
    pub fn build_request<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<HttpRequest> {
        let form = form::encode(params)?;
        tracing::debug!(path, fields = form.len(), "encoded form");
        let body = form.to_query_string();

        let url = format!("{}{}", self.base_url, path);
        url::Url::parse(&url).map_err(|err| CufError::RequestBuild(format!("{url}: {err}")))?;

        Ok(HttpRequest {
            url,
            headers: vec![
                ("content-type".to_string(), FORM_CONTENT_TYPE.to_string()),
                ("accept".to_string(), "application/json".to_string()),
                ("x-api-key".to_string(), self.api_key.clone()),
                ("user-agent".to_string(), USER_AGENT.to_string()),
            ],
            body,
        })
    }

    /// POST `params` to `path` and return the decoded JSON object.
    ///
    /// With the default configuration this is a single attempt. 5xx responses
    /// are repeated only when a retry policy with `max_retries > 0` was set;
    /// everything else is returned on the first occurrence.
    pub fn send<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<JsonObject> {
        let request = self.build_request(path, params)?;
        tracing::debug!(path, body_len = request.body.len(), "sending request");

        retry_with_backoff(&self.retry, || {
            let response = self.executor.execute(&request)?;
            tracing::debug!(path, status = response.status, "received response");
            parse_response(response)
        })
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// Interpret a response: status >= 400 is an `Api` error carrying the body
/// verbatim, anything else must be a JSON object.
pub fn parse_response(response: HttpResponse) -> Result<JsonObject> {
    if response.status >= 400 {
        return Err(CufError::Api {
            status: response.status,
            body: response.body,
        });
    }
    match serde_json::from_str::<Value>(&response.body)? {
        Value::Object(object) => Ok(object),
        other => Err(CufError::Decode(serde::de::Error::custom(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        )))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
