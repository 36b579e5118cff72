#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use guildkit_model::{Client, ClientConfig, RequestExecutor, TransportError};
use http::Method;
use parking_lot::Mutex;
use serde_json::Value;

/// One request as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Records every request and answers with queued replies (empty body once
/// the queue runs dry).
#[derive(Default)]
pub struct RecordingExecutor {
    requests: Mutex<Vec<Recorded>>,
    replies: Mutex<VecDeque<Value>>,
}

impl RecordingExecutor {
    pub fn reply(&self, body: Value) {
        self.replies.lock().push_back(body);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests.lock().last().cloned().expect("no request sent")
    }
}

#[async_trait]
impl RequestExecutor for RecordingExecutor {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
    ) -> Result<Bytes, TransportError> {
        let body = body.map(|raw| serde_json::from_slice(&raw).unwrap());
        self.requests.lock().push(Recorded {
            method,
            path: path.to_owned(),
            body,
        });
        Ok(match self.replies.lock().pop_front() {
            Some(reply) => Bytes::from(serde_json::to_vec(&reply).unwrap()),
            None => Bytes::new(),
        })
    }
}

pub fn setup() -> (Client, Arc<RecordingExecutor>) {
    let executor = Arc::new(RecordingExecutor::default());
    let client = Client::new(executor.clone(), ClientConfig::default());
    (client, executor)
}
