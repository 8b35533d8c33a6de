//! Capturing transport used by the facade tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::{ClientConfig, VinylDnsClient};
use crate::error::{Error, Result};
use crate::transport::{HttpResponse, HttpTransport, SignedRequest};

/// Records every dispatched request and replays queued responses in
/// order. With nothing queued it answers `200 {}`.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    requests: Arc<Mutex<Vec<SignedRequest>>>,
    responses: Arc<Mutex<VecDeque<Result<HttpResponse>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queues a transport-level failure for the next dispatch.
    pub fn fail_with(&self, detail: &str) {
        self.responses.lock().unwrap().push_back(Err(Error::Transport {
            detail: detail.to_string(),
        }));
    }

    pub fn requests(&self) -> Vec<SignedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> SignedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request dispatched")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn dispatch(&self, request: SignedRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        match self.responses.lock().unwrap().pop_front() {
            Some(queued) => queued,
            None => Ok(HttpResponse {
                status: 200,
                body: "{}".to_string(),
            }),
        }
    }
}

pub(crate) fn client_with(transport: &MockTransport) -> VinylDnsClient {
    VinylDnsClient::with_transport(
        ClientConfig::new("https://api.example.com", "testAccessKey", "testSecretKey"),
        Box::new(transport.clone()),
    )
    .unwrap()
}
