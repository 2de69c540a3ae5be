//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use dockhub_client::{
    CacheConfig, ClientConfig, HubClient, ManualClock, RequestDescriptor, Transport,
    TransportError,
};

type Reply = Result<Option<Value>, TransportError>;

/// Transport that replays queued replies and records every request.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RequestDescriptor>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a JSON body.
    pub fn reply(&self, body: Value) {
        self.replies.lock().push_back(Ok(Some(body)));
    }

    /// Queues an empty body.
    pub fn reply_empty(&self) {
        self.replies.lock().push_back(Ok(None));
    }

    /// Queues a transport failure.
    pub fn fail(&self, message: &str) {
        self.replies.lock().push_back(Err(TransportError::Other {
            message: message.to_string(),
        }));
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().clone()
    }

    pub fn last(&self) -> RequestDescriptor {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: RequestDescriptor) -> Reply {
        self.requests.lock().push(request);
        // Suspend once so concurrent calls interleave like real I/O.
        tokio::task::yield_now().await;
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Some(Value::Object(serde_json::Map::new()))))
    }
}

/// Client wired to a scripted transport and a manual clock.
pub struct Harness {
    pub client: HubClient,
    pub transport: Arc<ScriptedTransport>,
    pub clock: Arc<ManualClock>,
}

pub fn harness(cache: CacheConfig) -> Harness {
    let transport = ScriptedTransport::new();
    let clock = Arc::new(ManualClock::new());
    let client = HubClient::with_parts(
        ClientConfig::new().with_cache(cache),
        transport.clone(),
        clock.clone(),
    );
    Harness {
        client,
        transport,
        clock,
    }
}
