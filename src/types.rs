//! Data model for the VinylDNS REST API.
//!
//! Mirrors the wire format (camelCase JSON). Shapes are deliberately
//! permissive: server-assigned fields are optional, unknown fields are
//! ignored, and record data entries stay as raw JSON since their shape
//! varies by record type. Resources are not validated locally.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A DNS administrative domain managed by the remote service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<ZoneConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_connection: Option<ZoneConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<ZoneAcl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_sync: Option<String>,
}

/// TSIG connection details for a zone's primary or transfer server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConnection {
    pub name: String,
    pub key_name: String,
    pub key: String,
    pub primary_server: String,
}

/// Access-control rules attached to a zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneAcl {
    #[serde(default)]
    pub rules: Vec<Value>,
}

/// Change record returned by zone mutations and zone sync.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneChange {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub zone: Option<Zone>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub change_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
}

/// Page of zones.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListZonesResponse {
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub name_filter: Option<String>,
    #[serde(default)]
    pub start_from: Option<String>,
    /// Cursor for the next page; absent on the last page.
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

/// A named group of DNS records of one type within a zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Record data entries; shape depends on `record_type`
    /// (e.g. `{"address": "1.2.3.4"}` for A records).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_group_id: Option<String>,
}

/// Change record returned by record set mutations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetChange {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub zone: Option<Zone>,
    #[serde(default)]
    pub record_set: Option<RecordSet>,
    /// Previous record set on updates.
    #[serde(default)]
    pub updates: Option<RecordSet>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub change_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub system_message: Option<String>,
}

/// Page of record sets within a zone.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordSetsResponse {
    #[serde(default)]
    pub record_sets: Vec<RecordSet>,
    #[serde(default)]
    pub start_from: Option<String>,
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

/// Page of record set changes within a zone, newest first.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordSetChangesResponse {
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub record_set_changes: Vec<RecordSetChange>,
    #[serde(default)]
    pub start_from: Option<String>,
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

/// A submitted group of record mutations, processed asynchronously by
/// the remote service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchChange {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub created_timestamp: Option<String>,
    #[serde(default)]
    pub changes: Vec<Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub approval_status: Option<String>,
    #[serde(default)]
    pub owner_group_id: Option<String>,
}

/// Listing view of a batch change, without the individual changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchChangeSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub created_timestamp: Option<String>,
    #[serde(default)]
    pub total_changes: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub owner_group_id: Option<String>,
}

/// Page of batch change summaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBatchChangesResponse {
    #[serde(default)]
    pub batch_changes: Vec<BatchChangeSummary>,
    #[serde(default)]
    pub start_from: Option<String>,
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

/// Payload for submitting a new batch change.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchChangeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Individual add/delete entries, passed through as-is.
    pub changes: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_group_id: Option<String>,
}

/// An access-control group of users with admin and member roles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default)]
    pub members: Vec<UserId>,
    #[serde(default)]
    pub admins: Vec<UserId>,
}

/// Reference to a user by id, as carried in group membership lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserId {
    pub id: String,
}

/// Full user record returned by the member and admin listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub lock_status: Option<String>,
}

/// Page of groups.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGroupsResponse {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub group_name_filter: Option<String>,
    #[serde(default)]
    pub start_from: Option<String>,
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

/// Page of membership changes for a group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupActivity {
    #[serde(default)]
    pub changes: Vec<Value>,
    #[serde(default)]
    pub start_from: Option<String>,
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

/// Page of group members.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMembersResponse {
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default)]
    pub start_from: Option<String>,
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

/// Administrators of a group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAdminsResponse {
    #[serde(default)]
    pub admins: Vec<User>,
}
