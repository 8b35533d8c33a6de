//! Error types for the VinylDNS client.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`VinylDnsClient`](crate::VinylDnsClient) operations.
///
/// Exactly one of these is produced per failed operation; nothing is
/// retried or swallowed internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Client construction rejected the supplied configuration.
    #[error("invalid client configuration: {detail}")]
    Config { detail: String },

    /// The transport failed before a response was received
    /// (connection refused, DNS failure, timeout).
    #[error("transport error: {detail}")]
    Transport { detail: String },

    /// The remote service answered with a status of 400 or above.
    /// The raw response body is preserved verbatim.
    #[error("remote service responded with status {status}: {body}")]
    Api { status: u16, body: String },

    /// A successful response carried a body that could not be decoded.
    #[error("failed to decode response body: {detail}")]
    Parse { detail: String },

    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {detail}")]
    Serialization { detail: String },
}
