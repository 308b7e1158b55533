//! HTTP exchange types and the executor seam.
//!
//! # Design
//! Requests and responses are plain data. `Transport` builds an `HttpRequest`
//! and interprets an `HttpResponse` without touching the network; only an
//! `HttpExecutor` performs I/O. `UreqExecutor` is the production executor,
//! tests substitute their own.

use std::time::Duration;

use crate::error::{CufError, Result};

/// A form POST described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// First header value with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Performs one HTTP round trip.
///
/// Implementations must return `Ok` for every response that arrived,
/// whatever its status; status interpretation belongs to the transport.
pub trait HttpExecutor: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Blocking executor backed by a `ureq` agent.
///
/// The agent keeps its own connection pool and is safe to share between
/// threads.
#[derive(Clone)]
pub struct UreqExecutor {
    agent: ureq::Agent,
}

impl UreqExecutor {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl HttpExecutor for UreqExecutor {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.agent.post(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder
            .send(request.body.as_bytes())
            .map_err(classify_send_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| CufError::ResponseRead(Box::new(err)))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Split ureq failures into request-construction and network errors.
fn classify_send_error(err: ureq::Error) -> CufError {
    match err {
        ureq::Error::BadUri(_) | ureq::Error::Http(_) => CufError::RequestBuild(err.to_string()),
        other => CufError::Network(Box::new(other)),
    }
}
