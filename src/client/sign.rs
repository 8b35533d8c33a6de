//! AWS-V4-style request signing.
//!
//! The canonical request covers the method, path, query string, signed
//! headers and the SHA-256 of the exact body bytes sent, so the body must
//! be finalized before signing. For a fixed timestamp the output is a
//! pure function of its inputs; signing performs no I/O and cannot fail.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use super::VinylDnsClient;

type HmacSha256 = Hmac<Sha256>;

pub(crate) const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub(crate) const REGION: &str = "us-east-1";
pub(crate) const SERVICE: &str = "vinyldns";

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("hmac accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

impl VinylDnsClient {
    /// Computes the `Authorization` header value for one request.
    ///
    /// `timestamp` is the `X-Amz-Date` value (`%Y%m%dT%H%M%SZ`); its
    /// first eight characters scope the derived signing key to a date.
    pub(crate) fn sign(
        &self,
        method: &str,
        path: &str,
        query: &str,
        headers: &[(String, String)],
        payload: &str,
        timestamp: &str,
    ) -> String {
        // 1. Canonical headers: lowercased names, sorted.
        let mut pairs: Vec<(String, &str)> = headers
            .iter()
            .map(|(name, value)| (name.to_lowercase(), value.as_str()))
            .collect();
        pairs.sort();

        let canonical_headers: String = pairs
            .iter()
            .map(|(name, value)| format!("{name}:{value}\n"))
            .collect();
        let signed_headers = pairs
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(";");

        // 2. Canonical request over the hashed payload.
        let canonical_request = format!(
            "{method}\n{path}\n{query}\n{canonical_headers}\n{signed_headers}\n{}",
            sha256_hex(payload.as_bytes())
        );

        log::debug!("CanonicalRequest:\n{canonical_request}");

        // 3. String to sign under the date-scoped credential.
        let date = &timestamp[..8];
        let scope = format!("{date}/{REGION}/{SERVICE}/aws4_request");
        let string_to_sign = format!(
            "{ALGORITHM}\n{timestamp}\n{scope}\n{}",
            sha256_hex(canonical_request.as_bytes())
        );

        log::debug!("StringToSign:\n{string_to_sign}");

        // 4. HMAC chain from the secret key down to the signature.
        let k_date = hmac_sha256(
            format!("AWS4{}", self.secret_access_key).as_bytes(),
            date.as_bytes(),
        );
        let k_region = hmac_sha256(&k_date, REGION.as_bytes());
        let k_service = hmac_sha256(&k_region, SERVICE.as_bytes());
        let k_signing = hmac_sha256(&k_service, b"aws4_request");
        let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes()));

        format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
            self.access_key_id
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::client::{ClientConfig, VinylDnsClient};

    const TIMESTAMP: &str = "20240101T000000Z";

    fn client() -> VinylDnsClient {
        VinylDnsClient::new(ClientConfig::new(
            "https://api.example.com",
            "testAccessKey",
            "testSecretKey",
        ))
        .unwrap()
    }

    fn headers() -> Vec<(String, String)> {
        vec![
            ("Host".to_string(), "api.example.com".to_string()),
            ("X-Amz-Date".to_string(), TIMESTAMP.to_string()),
        ]
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let client = client();
        let first = client.sign("GET", "/zones", "", &headers(), "", TIMESTAMP);
        let second = client.sign("GET", "/zones", "", &headers(), "", TIMESTAMP);
        assert_eq!(first, second);
    }

    #[test]
    fn authorization_header_shape() {
        let client = client();
        let auth = client.sign("GET", "/zones/abc123", "", &headers(), "", TIMESTAMP);
        assert!(auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=testAccessKey/20240101/us-east-1/vinyldns/aws4_request, \
             SignedHeaders=host;x-amz-date, Signature="
        ));
        let signature = auth.rsplit('=').next().unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_covers_the_body() {
        let client = client();
        let a = client.sign("POST", "/groups", "", &headers(), r#"{"name":"team-a"}"#, TIMESTAMP);
        let b = client.sign("POST", "/groups", "", &headers(), r#"{"name":"team-b"}"#, TIMESTAMP);
        assert_ne!(a, b);
    }

    #[test]
    fn signature_covers_the_query_string() {
        let client = client();
        let a = client.sign("GET", "/zones", "maxItems=50", &headers(), "", TIMESTAMP);
        let b = client.sign("GET", "/zones", "maxItems=51", &headers(), "", TIMESTAMP);
        assert_ne!(a, b);
    }

    #[test]
    fn signature_covers_the_timestamp() {
        let client = client();
        let a = client.sign("GET", "/zones", "", &headers(), "", TIMESTAMP);
        let b = client.sign("GET", "/zones", "", &headers(), "", "20240102T000000Z");
        assert_ne!(a, b);
    }

    #[test]
    fn content_type_joins_the_signed_headers() {
        let client = client();
        let mut with_body = headers();
        with_body.push(("Content-Type".to_string(), "application/json".to_string()));
        let auth = client.sign("POST", "/groups", "", &with_body, "{}", TIMESTAMP);
        assert!(auth.contains("SignedHeaders=content-type;host;x-amz-date,"));
    }
}
