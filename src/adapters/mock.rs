//! Mock transport for testing without a live service.
//!
//! Records every request and replays queued responses.

use crate::domain::ClientError;
use crate::ports::TransportPort;
use serde_json::{Map, Value};
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// One request as seen by the transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub qs: Vec<(String, String)>,
    pub body: Option<Value>,
    pub signature: String,
}

/// Recording transport double.
///
/// Responses are consumed FIFO; when the queue is empty, calls resolve to
/// an empty JSON object.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<Result<Value, ClientError>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request.
    pub async fn enqueue(&self, response: Value) {
        self.responses.lock().await.push_back(Ok(response));
    }

    /// Queue an error for the next request.
    pub async fn enqueue_error(&self, error: ClientError) {
        self.responses.lock().await.push_back(Err(error));
    }

    /// All requests seen so far, in order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().await.last().cloned()
    }

    async fn record(&self, request: RecordedRequest) -> Result<Value, ClientError> {
        self.requests.lock().await.push(request);
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Value::Object(Map::new())))
    }
}

#[async_trait::async_trait]
impl TransportPort for MockTransport {
    async fn get(
        &self,
        url: &str,
        qs: &[(String, String)],
        signature: &str,
    ) -> Result<Value, ClientError> {
        self.record(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            qs: qs.to_vec(),
            body: None,
            signature: signature.to_string(),
        })
        .await
    }

    async fn post(&self, url: &str, body: Value, signature: &str) -> Result<Value, ClientError> {
        self.record(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            qs: Vec::new(),
            body: Some(body),
            signature: signature.to_string(),
        })
        .await
    }

    async fn put(&self, url: &str, body: Value, signature: &str) -> Result<Value, ClientError> {
        self.record(RecordedRequest {
            method: "PUT",
            url: url.to_string(),
            qs: Vec::new(),
            body: Some(body),
            signature: signature.to_string(),
        })
        .await
    }

    async fn delete(&self, url: &str, signature: &str) -> Result<Value, ClientError> {
        self.record(RecordedRequest {
            method: "DELETE",
            url: url.to_string(),
            qs: Vec::new(),
            body: None,
            signature: signature.to_string(),
        })
        .await
    }
}
