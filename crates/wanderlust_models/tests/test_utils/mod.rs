//! Test doubles for driver-level tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use wanderlust_core::{GenerateRequest, GenerateResponse};
use wanderlust_error::{MistralError, MistralErrorKind, WanderlustError, WanderlustResult};
use wanderlust_interface::WanderlustDriver;

/// A single scripted outcome.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    Text(String),
    Error(MistralErrorKind),
}

/// Driver that replays a script of outcomes, one per call.
///
/// Calls past the end of the script repeat the last entry.
pub struct MockDriver {
    script: Vec<MockResponse>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerateRequest>>,
}

#[allow(dead_code)]
impl MockDriver {
    pub fn new(script: Vec<MockResponse>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![MockResponse::Text(text.into())])
    }

    pub fn failing(kind: MistralErrorKind) -> Self {
        Self::new(vec![MockResponse::Error(kind)])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WanderlustDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> WanderlustResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .script
            .get(index)
            .or_else(|| self.script.last())
            .cloned()
            .unwrap_or(MockResponse::Text(String::new()));

        match outcome {
            MockResponse::Text(text) => Ok(GenerateResponse::new(text)),
            MockResponse::Error(kind) => Err(WanderlustError::from(MistralError::new(kind))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Shorthand for an HTTP error kind.
#[allow(dead_code)]
pub fn http(status_code: u16) -> MistralErrorKind {
    MistralErrorKind::Http {
        status_code,
        message: format!("status {status_code}"),
    }
}
