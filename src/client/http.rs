//! Request dispatch shared by every operation.

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::transport::{Method, SignedRequest};
use crate::urls::Endpoint;

use super::VinylDnsClient;

impl VinylDnsClient {
    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        self.dispatch(Method::GET, endpoint, String::new()).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        self.dispatch(Method::DELETE, endpoint, String::new()).await
    }

    /// POST with no caller-supplied body (zone sync).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        self.dispatch(Method::POST, endpoint, String::new()).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T> {
        let payload = encode_body(body)?;
        self.dispatch(Method::POST, endpoint, payload).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T> {
        let payload = encode_body(body)?;
        self.dispatch(Method::PUT, endpoint, payload).await
    }

    /// Builds, signs and dispatches one request, then decodes the
    /// response. The payload is final before `sign` runs, so the
    /// signature covers the exact bytes sent.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: Endpoint,
        payload: String,
    ) -> Result<T> {
        let timestamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

        let mut headers = vec![
            ("Host".to_string(), self.host.clone()),
            ("X-Amz-Date".to_string(), timestamp.clone()),
        ];
        if !payload.is_empty() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let authorization = self.sign(
            method.as_str(),
            &endpoint.path,
            &endpoint.query,
            &headers,
            &payload,
            &timestamp,
        );
        headers.push(("Authorization".to_string(), authorization));

        let url = endpoint.url(&self.origin);
        log::debug!("{method} {url}");

        let response = self
            .transport
            .dispatch(SignedRequest {
                method,
                url,
                headers,
                body: payload,
            })
            .await?;

        log::debug!("Response Status: {}", response.status);
        log::debug!("Response Body: {}", response.body);

        if response.status >= 400 {
            return Err(Error::Api {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("failed to decode response body: {e}");
            Error::Parse {
                detail: e.to_string(),
            }
        })
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String> {
    serde_json::to_string(body).map_err(|e| Error::Serialization {
        detail: e.to_string(),
    })
}
