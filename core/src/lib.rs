//! Synchronous client core for the CUFinder B2B data API.
//!
//! # Overview
//! Every endpoint is a form-encoded POST authenticated with an `x-api-key`
//! header. A call validates its parameter record, encodes it, sends it,
//! unwraps the optional `data` envelope and binds the result onto a typed
//! response record.
//!
//! # Design
//! - `Transport` is immutable after construction and safe to share between
//!   threads. The HTTP exchange itself sits behind `HttpExecutor`, so tests
//!   and hosts can supply their own.
//! - Parameter and response records are plain serde types. The form encoder
//!   is a serde `Serializer`, so wire names come from field names and
//!   `#[serde(rename)]`.
//! - `Service` exposes one method per endpoint; `Cufinder` adds the short
//!   positional helpers most callers want.

pub mod bind;
pub mod config;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod form;
pub mod http;
pub mod models;
pub mod params;
pub mod responses;
pub mod retry;
pub mod sdk;
pub mod service;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use config::ClientConfig;
pub use endpoint::{Endpoint, EndpointRequest};
pub use envelope::JsonObject;
pub use error::{CufError, Result};
pub use form::{encode, EncodedForm};
pub use http::{HttpExecutor, HttpRequest, HttpResponse, UreqExecutor};
pub use params::*;
pub use responses::*;
pub use retry::RetryPolicy;
pub use sdk::Cufinder;
pub use service::Service;
pub use transport::Transport;
