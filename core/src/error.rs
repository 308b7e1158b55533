//! Error types for the CUFinder client.
//!
//! # Design
//! A single `CufError` covers every layer of a call: validation, form
//! encoding, the HTTP exchange and binding of the response. Layers add
//! context and re-surface errors rather than recovering from them. The only
//! wrapper variant is `Service`, which tags a downstream failure with the
//! endpoint code that produced it.

use std::fmt::Display;

use thiserror::Error;

/// Boxed cause carried by transport-level failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CufError>;

/// Errors returned by the CUFinder client.
#[derive(Debug, Error)]
pub enum CufError {
    /// A required parameter was empty. Never retried.
    #[error("{field} is required")]
    Validation { field: &'static str },

    /// The parameter value could not be flattened into a form body.
    #[error("invalid parameter record: {0}")]
    Encoding(String),

    /// The request could not be assembled (bad base URL, bad header).
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// DNS, connect, TLS or timeout failure before a response arrived.
    #[error("failed to send request: {0}")]
    Network(#[source] BoxError),

    /// A response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    ResponseRead(#[source] BoxError),

    /// The server answered with status >= 400. The body is kept verbatim.
    #[error("API error: status {status}, body: {body}")]
    Api { status: u16, body: String },

    /// A successful response did not contain a JSON object.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response object did not match the expected record shape.
    #[error("failed to bind response field `{field}`: {message}")]
    Bind { field: String, message: String },

    /// Configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A downstream failure tagged with the endpoint that produced it.
    #[error("{service} service error: {source}")]
    Service {
        service: &'static str,
        #[source]
        source: Box<CufError>,
    },
}

impl CufError {
    /// Innermost error, looking through `Service` wrappers.
    pub fn root(&self) -> &CufError {
        match self {
            CufError::Service { source, .. } => source.root(),
            other => other,
        }
    }

    /// HTTP status of an `Api` error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            CufError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether repeating the same exchange could succeed.
    ///
    /// Only 5xx responses qualify. A network failure may have reached the
    /// server and consumed credits, so it is never repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(self.root(), CufError::Api { status, .. } if *status >= 500)
    }
}

impl serde::ser::Error for CufError {
    fn custom<T: Display>(msg: T) -> Self {
        CufError::Encoding(msg.to_string())
    }
}
