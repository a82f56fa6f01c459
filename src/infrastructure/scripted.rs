use crate::domain::ports::{HttpMethod, Transport};
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A request seen by [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug)]
enum Reply {
    Body(String),
    Fault(String),
}

/// An in-memory transport that replays queued replies in order.
///
/// Every request is recorded, so tests can assert on the exact method, URL and
/// parameters the client produced. Clones share the same queue and log.
#[derive(Debug, Default, Clone)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response body.
    pub async fn push_body(&self, body: impl Into<String>) {
        self.replies.lock().await.push_back(Reply::Body(body.into()));
    }

    /// Queues a transport fault, as if the network call had failed.
    pub async fn push_fault(&self, reason: impl Into<String>) {
        self.replies.lock().await.push_back(Reply::Fault(reason.into()));
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn issue_request(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String> {
        self.requests.lock().await.push(RecordedRequest {
            method,
            url: url.to_owned(),
            params: params.to_vec(),
        });
        match self.replies.lock().await.pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fault(reason)) => Err(GatewayError::Transport(reason)),
            None => Err(GatewayError::Transport(format!(
                "no scripted reply for {method} {url}"
            ))),
        }
    }
}
