//! Client library for the VinylDNS REST API.
//!
//! Exposes the remote service's zone, record set, batch change and group
//! operations as typed method calls. Each operation builds a resource URL,
//! signs the request with the account's credential pair (AWS-V4-style
//! canonical signing) and dispatches it through an [`HttpTransport`],
//! resolving once with the decoded JSON response or an [`Error`].
//!
//! The library keeps no state between calls and never retries; pagination
//! is driven by the caller through the `startFrom` / `nextId` cursor
//! convention on the listing operations.
//!
//! ```no_run
//! use vinyldns::{ClientConfig, ListFilters, VinylDnsClient};
//!
//! # async fn run() -> vinyldns::Result<()> {
//! let client = VinylDnsClient::new(ClientConfig::new(
//!     "https://api.example.com",
//!     "accessKey",
//!     "secretKey",
//! ))?;
//!
//! let zones = client.list_zones(&ListFilters::default()).await?;
//! for zone in zones.zones {
//!     println!("{}", zone.name);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod transport;
mod types;
mod urls;

pub use client::{ClientConfig, VinylDnsClient};
pub use error::{Error, Result};
pub use transport::{HttpResponse, HttpTransport, Method, ReqwestTransport, SignedRequest};
pub use types::*;
pub use urls::ListFilters;
