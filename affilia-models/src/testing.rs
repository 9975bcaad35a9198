//! In-memory transport for model tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use affilia_client::{ApiClient, ApiError, ClientConfig, EndpointCall, SessionContext, Transport};

/// Transport that records every call and replays scripted response data.
///
/// Unscripted calls answer with a `{"result": true}` body so tests only
/// script the responses they assert on.
pub(crate) struct RecordingTransport {
    calls: Mutex<Vec<EndpointCall>>,
    responses: Mutex<VecDeque<Value>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        })
    }

    /// Scripts the next response's envelope data.
    pub fn push_data(&self, data: Value) {
        self.responses.lock().unwrap().push_back(data);
    }

    pub fn calls(&self) -> Vec<EndpointCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, call: &EndpointCall) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(call.clone());
        let data = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| json!({"result": true}));
        Ok(json!({
            "status": {"code": 200, "message": "OK"},
            "data": data
        }))
    }
}

/// Builds a client backed by the given recording transport.
pub(crate) fn test_client(transport: &Arc<RecordingTransport>) -> ApiClient {
    ApiClient::with_transport(
        ClientConfig::default(),
        SessionContext::new()
            .with_user_agent("test-agent")
            .with_language("en-US")
            .with_client_ip("203.0.113.7")
            .with_encoding("gzip"),
        transport.clone() as Arc<dyn Transport>,
    )
}
