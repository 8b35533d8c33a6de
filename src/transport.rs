//! Transport seam between the client and the HTTP stack.

use async_trait::async_trait;

use crate::error::{Error, Result};

pub use reqwest::Method;

/// A fully signed request descriptor, ready for dispatch.
///
/// Built fresh for every operation and never reused; the `Authorization`
/// and `X-Amz-Date` headers are already attached by the time a transport
/// sees it.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON-encoded body, empty for bodyless requests.
    pub body: String,
}

/// Raw response handed back by a transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The single I/O boundary of the crate.
///
/// The default implementation is [`ReqwestTransport`]; callers wanting
/// timeouts, proxies or instrumentation supply their own through
/// [`VinylDnsClient::with_transport`](crate::VinylDnsClient::with_transport).
/// The library imposes no ordering between concurrently dispatched
/// requests and no rate limiting.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Dispatches one request and resolves exactly once with the raw
    /// response, or fails with [`Error::Transport`].
    async fn dispatch(&self, request: SignedRequest) -> Result<HttpResponse>;
}

/// Default transport backed by a shared [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn dispatch(&self, request: SignedRequest) -> Result<HttpResponse> {
        let SignedRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, url.as_str());
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        if !body.is_empty() {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| Error::Transport {
            detail: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| Error::Transport {
            detail: format!("failed to read response body: {e}"),
        })?;

        Ok(HttpResponse { status, body })
    }
}
