//! Batch change operations.
//!
//! The remote API only supports submitting and reading batch changes;
//! a submitted batch cannot be updated or deleted.

use crate::error::Result;
use crate::types::{BatchChange, BatchChangeInput, ListBatchChangesResponse};
use crate::urls::ListFilters;

use super::VinylDnsClient;

impl VinylDnsClient {
    /// Lists the account's batch changes, newest first.
    pub async fn list_batch_changes(
        &self,
        filters: &ListFilters,
    ) -> Result<ListBatchChangesResponse> {
        self.get(self.urls.batch_changes().with_filters(filters))
            .await
    }

    /// Fetches a single batch change with its individual entries.
    pub async fn get_batch_change(&self, id: &str) -> Result<BatchChange> {
        self.get(self.urls.batch_change(id)).await
    }

    /// Submits a new batch of record mutations for asynchronous
    /// processing.
    pub async fn create_batch_change(&self, input: &BatchChangeInput) -> Result<BatchChange> {
        self.post(self.urls.batch_changes(), input).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::test_support::{MockTransport, client_with};
    use crate::transport::Method;
    use crate::types::BatchChangeInput;
    use crate::urls::ListFilters;

    #[tokio::test]
    async fn batch_changes_live_under_zonechanges() {
        let transport = MockTransport::new();
        transport.reply(200, r#"{"batchChanges":[{"id":"b1","totalChanges":3}]}"#);
        let client = client_with(&transport);

        let page = client
            .list_batch_changes(&ListFilters::default())
            .await
            .unwrap();
        assert_eq!(page.batch_changes[0].total_changes, Some(3));
        assert_eq!(
            transport.last_request().url,
            "https://api.example.com/zonechanges/batchrecordchanges"
        );
    }

    #[tokio::test]
    async fn get_batch_change_by_id() {
        let transport = MockTransport::new();
        transport.reply(
            200,
            r#"{"id":"b1","status":"Complete","changes":[{"changeType":"Add"}]}"#,
        );
        let client = client_with(&transport);

        let batch = client.get_batch_change("b1").await.unwrap();
        assert_eq!(batch.id.as_deref(), Some("b1"));
        assert_eq!(batch.changes.len(), 1);
        assert_eq!(
            transport.last_request().url,
            "https://api.example.com/zonechanges/batchrecordchanges/b1"
        );
    }

    #[tokio::test]
    async fn create_batch_change_posts_the_entries() {
        let transport = MockTransport::new();
        transport.reply(202, r#"{"id":"b2","status":"PendingProcessing"}"#);
        let client = client_with(&transport);

        let input = BatchChangeInput {
            comments: Some("rotate web tier".into()),
            changes: vec![json!({
                "changeType": "Add",
                "inputName": "www.example.com.",
                "type": "A",
                "ttl": 300,
                "record": {"address": "10.1.1.1"}
            })],
            ..Default::default()
        };
        let batch = client.create_batch_change(&input).await.unwrap();
        assert_eq!(batch.id.as_deref(), Some("b2"));

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(sent["comments"], "rotate web tier");
        assert_eq!(sent["changes"][0]["inputName"], "www.example.com.");
        // absent ownerGroupId stays out of the payload
        assert!(sent.get("ownerGroupId").is_none());
    }
}
