//! In-crate test doubles.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{CufError, Result};
use crate::http::{HttpExecutor, HttpRequest, HttpResponse};

/// Executor that records every request and replays canned responses in
/// order. Once the queue is empty it answers with a network error.
#[derive(Default)]
pub struct RecordingExecutor {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl RecordingExecutor {
    pub fn with_responses(responses: Vec<HttpResponse>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        }
    }

    /// Executor holding a single 200 response with `body`.
    pub fn ok(body: &str) -> Self {
        Self::with_responses(vec![HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }])
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpExecutor for RecordingExecutor {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| CufError::Network("no canned response left".into()))
    }
}
