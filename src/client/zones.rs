//! Zone operations.

use crate::error::Result;
use crate::types::{ListZonesResponse, Zone, ZoneChange};
use crate::urls::ListFilters;

use super::VinylDnsClient;

impl VinylDnsClient {
    /// Lists zones visible to the account, optionally filtered by name.
    pub async fn list_zones(&self, filters: &ListFilters) -> Result<ListZonesResponse> {
        self.get(self.urls.zones().with_filters(filters)).await
    }

    /// Fetches a single zone by id.
    pub async fn get_zone(&self, id: &str) -> Result<Zone> {
        self.get(self.urls.zone(id)).await
    }

    /// Connects a new zone. The change is processed asynchronously by
    /// the remote service; poll the zone for its status.
    pub async fn create_zone(&self, zone: &Zone) -> Result<ZoneChange> {
        self.post(self.urls.zones(), zone).await
    }

    /// Replaces the zone identified by `id` with `zone`.
    pub async fn update_zone(&self, id: &str, zone: &Zone) -> Result<ZoneChange> {
        self.put(self.urls.zone(id), zone).await
    }

    /// Abandons a zone, removing it from management.
    pub async fn delete_zone(&self, id: &str) -> Result<ZoneChange> {
        self.delete(self.urls.zone(id)).await
    }

    /// Triggers a sync of the zone against its backing DNS server.
    pub async fn sync_zone(&self, id: &str) -> Result<ZoneChange> {
        self.post_empty(self.urls.zone_sync(id)).await
    }
}
