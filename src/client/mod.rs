//! The VinylDNS client facade.
//!
//! Operations are grouped per resource in the submodules; each one builds
//! an endpoint, signs the request and hands it to the transport.

mod batch_changes;
mod groups;
mod http;
mod record_sets;
mod sign;
#[cfg(test)]
pub(crate) mod test_support;
mod zones;

use reqwest::Url;

use crate::error::{Error, Result};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::urls::UrlBuilder;

/// Connection settings for a [`VinylDnsClient`].
///
/// All three fields are required; validation happens once at client
/// construction, never per request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, e.g. `https://api.example.com`.
    pub api_url: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl ClientConfig {
    pub fn new(
        api_url: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }
}

/// Client for the VinylDNS REST API.
///
/// Holds no mutable state; one instance can serve any number of
/// concurrent operations. Each method issues exactly one signed request
/// and resolves once with the decoded response or an [`Error`].
pub struct VinylDnsClient {
    pub(crate) transport: Box<dyn HttpTransport>,
    pub(crate) urls: UrlBuilder,
    /// `scheme://host[:port]`, no trailing slash.
    pub(crate) origin: String,
    /// Value of the signed `Host` header.
    pub(crate) host: String,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
}

impl VinylDnsClient {
    /// Creates a client using the default reqwest-backed transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_transport(config, Box::new(ReqwestTransport::new()))
    }

    /// Creates a client dispatching through a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Box<dyn HttpTransport>) -> Result<Self> {
        if config.access_key_id.is_empty() {
            return Err(Error::Config {
                detail: "access key id is required".into(),
            });
        }
        if config.secret_access_key.is_empty() {
            return Err(Error::Config {
                detail: "secret access key is required".into(),
            });
        }

        let base = Url::parse(&config.api_url).map_err(|e| Error::Config {
            detail: format!("invalid api url: {e}"),
        })?;
        let host = base.host_str().ok_or_else(|| Error::Config {
            detail: "api url has no host".into(),
        })?;
        let host = match base.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        let origin = format!("{}://{host}", base.scheme());
        let prefix = base.path().trim_end_matches('/').to_string();

        Ok(Self {
            transport,
            urls: UrlBuilder::new(prefix),
            origin,
            host,
            access_key_id: config.access_key_id,
            secret_access_key: config.secret_access_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{MockTransport, client_with};
    use super::*;

    #[test]
    fn missing_access_key_fails_at_construction() {
        let err = VinylDnsClient::new(ClientConfig::new("https://api.example.com", "", "secret"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn missing_secret_fails_at_construction() {
        let err = VinylDnsClient::new(ClientConfig::new("https://api.example.com", "key", ""))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn unparsable_api_url_fails_at_construction() {
        let err = VinylDnsClient::new(ClientConfig::new("not a url", "key", "secret"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn api_url_without_host_fails_at_construction() {
        let err = VinylDnsClient::new(ClientConfig::new("unix:/run/api.sock", "key", "secret"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn api_url_base_path_prefixes_every_resource() {
        let transport = MockTransport::new();
        transport.reply(200, r#"{"id":"z1","name":"example."}"#);
        let client = VinylDnsClient::with_transport(
            ClientConfig::new("https://api.example.com:9443/api/v1/", "key", "secret"),
            Box::new(transport.clone()),
        )
        .unwrap();

        client.get_zone("z1").await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://api.example.com:9443/api/v1/zones/z1"
        );
    }

    #[tokio::test]
    async fn each_operation_issues_exactly_one_request() {
        let transport = MockTransport::new();
        transport.reply(200, r#"{"zones":[]}"#);
        transport.reply(200, r#"{"groups":[]}"#);
        let client = client_with(&transport);

        client.list_zones(&Default::default()).await.unwrap();
        client.list_groups(&Default::default()).await.unwrap();
        assert_eq!(transport.requests().len(), 2);
    }
}
