//! Resource URL construction.
//!
//! Pure string assembly: identifiers are interpolated literally and query
//! parameters are emitted only when present. No I/O and no validation;
//! a malformed identifier surfaces as a remote 4xx error.

use urlencoding::encode;

/// Optional filter and pagination parameters accepted by the listing
/// operations.
///
/// Absent fields are omitted from the query string entirely. `start_from`
/// is the opaque cursor echoed by a previous response's `nextId`;
/// `max_items` is the remote's page size (1..=100). Neither is validated
/// locally.
#[derive(Debug, Default, Clone)]
pub struct ListFilters {
    pub name_filter: Option<String>,
    pub group_name_filter: Option<String>,
    pub start_from: Option<String>,
    pub max_items: Option<u32>,
}

impl ListFilters {
    /// Query-string form, parameters in a fixed order, values
    /// percent-encoded. Empty when no filter is set.
    pub(crate) fn to_query(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(v) = &self.name_filter {
            pairs.push(format!("nameFilter={}", encode(v)));
        }
        if let Some(v) = &self.group_name_filter {
            pairs.push(format!("groupNameFilter={}", encode(v)));
        }
        if let Some(v) = &self.start_from {
            pairs.push(format!("startFrom={}", encode(v)));
        }
        if let Some(v) = self.max_items {
            pairs.push(format!("maxItems={v}"));
        }
        pairs.join("&")
    }
}

/// Path and query of one resource endpoint, relative to the API origin.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub path: String,
    pub query: String,
}

impl Endpoint {
    /// Attaches listing filters as the query string.
    pub fn with_filters(mut self, filters: &ListFilters) -> Self {
        self.query = filters.to_query();
        self
    }

    /// Absolute URL under `origin` (`scheme://host[:port]`). No `?` is
    /// appended when the query is empty.
    pub fn url(&self, origin: &str) -> String {
        if self.query.is_empty() {
            format!("{origin}{}", self.path)
        } else {
            format!("{origin}{}?{}", self.path, self.query)
        }
    }
}

/// Maps logical resources to endpoints under the configured base path.
#[derive(Debug, Clone)]
pub(crate) struct UrlBuilder {
    /// Base path of the API URL without trailing slash, "" for root.
    prefix: String,
}

impl UrlBuilder {
    pub fn new(prefix: String) -> Self {
        Self { prefix }
    }

    fn at(&self, path: String) -> Endpoint {
        Endpoint {
            path,
            query: String::new(),
        }
    }

    pub fn zones(&self) -> Endpoint {
        self.at(format!("{}/zones", self.prefix))
    }

    pub fn zone(&self, id: &str) -> Endpoint {
        self.at(format!("{}/zones/{id}", self.prefix))
    }

    pub fn zone_sync(&self, id: &str) -> Endpoint {
        self.at(format!("{}/zones/{id}/sync", self.prefix))
    }

    pub fn record_sets(&self, zone_id: &str) -> Endpoint {
        self.at(format!("{}/zones/{zone_id}/recordsets", self.prefix))
    }

    pub fn record_set(&self, zone_id: &str, id: &str) -> Endpoint {
        self.at(format!("{}/zones/{zone_id}/recordsets/{id}", self.prefix))
    }

    pub fn record_set_change(&self, zone_id: &str, record_set_id: &str, change_id: &str) -> Endpoint {
        self.at(format!(
            "{}/zones/{zone_id}/recordsets/{record_set_id}/changes/{change_id}",
            self.prefix
        ))
    }

    pub fn record_set_changes(&self, zone_id: &str) -> Endpoint {
        self.at(format!("{}/zones/{zone_id}/recordsetchanges", self.prefix))
    }

    pub fn batch_changes(&self) -> Endpoint {
        self.at(format!("{}/zonechanges/batchrecordchanges", self.prefix))
    }

    pub fn batch_change(&self, id: &str) -> Endpoint {
        self.at(format!("{}/zonechanges/batchrecordchanges/{id}", self.prefix))
    }

    pub fn groups(&self) -> Endpoint {
        self.at(format!("{}/groups", self.prefix))
    }

    pub fn group(&self, id: &str) -> Endpoint {
        self.at(format!("{}/groups/{id}", self.prefix))
    }

    pub fn group_activity(&self, id: &str) -> Endpoint {
        self.at(format!("{}/groups/{id}/activity", self.prefix))
    }

    pub fn group_members(&self, id: &str) -> Endpoint {
        self.at(format!("{}/groups/{id}/members", self.prefix))
    }

    pub fn group_admins(&self, id: &str) -> Endpoint {
        self.at(format!("{}/groups/{id}/admins", self.prefix))
    }
}
