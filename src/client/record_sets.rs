//! Record set operations, including the change history endpoints.

use crate::error::Result;
use crate::types::{
    ListRecordSetChangesResponse, ListRecordSetsResponse, RecordSet, RecordSetChange,
};
use crate::urls::ListFilters;

use super::VinylDnsClient;

impl VinylDnsClient {
    /// Lists record sets within a zone, optionally filtered by name.
    pub async fn list_record_sets(
        &self,
        zone_id: &str,
        filters: &ListFilters,
    ) -> Result<ListRecordSetsResponse> {
        self.get(self.urls.record_sets(zone_id).with_filters(filters))
            .await
    }

    /// Fetches a single record set.
    pub async fn get_record_set(&self, zone_id: &str, id: &str) -> Result<RecordSet> {
        self.get(self.urls.record_set(zone_id, id)).await
    }

    /// Creates a record set in the zone.
    pub async fn create_record_set(
        &self,
        zone_id: &str,
        record_set: &RecordSet,
    ) -> Result<RecordSetChange> {
        self.post(self.urls.record_sets(zone_id), record_set).await
    }

    /// Replaces the record set identified by `id`.
    pub async fn update_record_set(
        &self,
        zone_id: &str,
        id: &str,
        record_set: &RecordSet,
    ) -> Result<RecordSetChange> {
        self.put(self.urls.record_set(zone_id, id), record_set).await
    }

    /// Deletes a record set from the zone.
    pub async fn delete_record_set(&self, zone_id: &str, id: &str) -> Result<RecordSetChange> {
        self.delete(self.urls.record_set(zone_id, id)).await
    }

    /// Fetches one change previously applied to a record set.
    pub async fn get_record_set_change(
        &self,
        zone_id: &str,
        record_set_id: &str,
        change_id: &str,
    ) -> Result<RecordSetChange> {
        self.get(self.urls.record_set_change(zone_id, record_set_id, change_id))
            .await
    }

    /// Lists the change history of a zone, newest first.
    pub async fn list_record_set_changes(
        &self,
        zone_id: &str,
        filters: &ListFilters,
    ) -> Result<ListRecordSetChangesResponse> {
        self.get(self.urls.record_set_changes(zone_id).with_filters(filters))
            .await
    }
}
