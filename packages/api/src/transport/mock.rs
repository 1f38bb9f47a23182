use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use super::{Method, Transport};
use crate::error::TransportError;

type Reply = Result<Value, TransportError>;

/// One request seen by a [`MockTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct MockState {
    replies: HashMap<(Method, String), VecDeque<Reply>>,
    requests: Vec<RecordedRequest>,
}

/// In-memory [`Transport`] for testing.
///
/// Replies are scripted per method and URL. Queued replies are consumed in
/// order and the last one keeps answering. Unscripted routes fail with a
/// network error. Clones share the same script and request log.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a reply for `method url`.
    pub fn reply(&self, method: Method, url: impl Into<String>, reply: Reply) -> &Self {
        self.state()
            .replies
            .entry((method, url.into()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn reply_ok(&self, method: Method, url: impl Into<String>, body: Value) -> &Self {
        self.reply(method, url, Ok(body))
    }

    pub fn reply_status(
        &self,
        method: Method,
        url: impl Into<String>,
        status: u16,
        body: Option<Value>,
    ) -> &Self {
        self.reply(method, url, Err(TransportError::Status { status, body }))
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }

    /// Requests received for `method url`.
    pub fn requests_to(&self, method: Method, url: &str) -> Vec<RecordedRequest> {
        self.state()
            .requests
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state().requests.clear();
    }
}

impl Transport for MockTransport {
    async fn call(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let mut state = self.state();
        state.requests.push(RecordedRequest {
            method,
            url: url.to_string(),
            body,
        });

        let Some(queue) = state.replies.get_mut(&(method, url.to_string())) else {
            return Err(TransportError::Network(format!(
                "no mock reply for {method} {url}"
            )));
        };
        if queue.len() > 1 {
            if let Some(reply) = queue.pop_front() {
                return reply;
            }
        }
        match queue.front() {
            Some(reply) => reply.clone(),
            None => Err(TransportError::Network(format!(
                "no mock reply for {method} {url}"
            ))),
        }
    }
}
