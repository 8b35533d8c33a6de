//! Group operations.

use crate::error::Result;
use crate::types::{
    Group, GroupActivity, ListAdminsResponse, ListGroupsResponse, ListMembersResponse,
};
use crate::urls::ListFilters;

use super::VinylDnsClient;

impl VinylDnsClient {
    /// Lists groups the account belongs to, optionally filtered by name.
    pub async fn list_groups(&self, filters: &ListFilters) -> Result<ListGroupsResponse> {
        self.get(self.urls.groups().with_filters(filters)).await
    }

    /// Fetches a single group by id.
    pub async fn get_group(&self, id: &str) -> Result<Group> {
        self.get(self.urls.group(id)).await
    }

    /// Creates a group; the response carries the server-assigned id.
    pub async fn create_group(&self, group: &Group) -> Result<Group> {
        self.post(self.urls.groups(), group).await
    }

    /// Replaces the group identified by `id` with `group`.
    pub async fn update_group(&self, id: &str, group: &Group) -> Result<Group> {
        self.put(self.urls.group(id), group).await
    }

    /// Deletes a group.
    pub async fn delete_group(&self, id: &str) -> Result<Group> {
        self.delete(self.urls.group(id)).await
    }

    /// Lists the membership changes of a group.
    pub async fn get_group_activity(
        &self,
        id: &str,
        filters: &ListFilters,
    ) -> Result<GroupActivity> {
        self.get(self.urls.group_activity(id).with_filters(filters))
            .await
    }

    /// Lists the members of a group.
    pub async fn list_group_members(
        &self,
        id: &str,
        filters: &ListFilters,
    ) -> Result<ListMembersResponse> {
        self.get(self.urls.group_members(id).with_filters(filters))
            .await
    }

    /// Lists the administrators of a group.
    pub async fn list_group_admins(&self, id: &str) -> Result<ListAdminsResponse> {
        self.get(self.urls.group_admins(id)).await
    }
}
