use lidarr_client::{LidarrClient, Tag};

use crate::diag::{self, CLIENT_ERROR, Diagnostics, RESOURCE_ERROR};

/// Managed Lidarr tag
pub struct TagResource<'a> {
    client: &'a LidarrClient,
}

impl<'a> TagResource<'a> {
    /// Resource type name used in diagnostics
    pub const TYPE_NAME: &'static str = "lidarr_tag";

    /// Wrap a client
    pub fn new(client: &'a LidarrClient) -> Self {
        Self { client }
    }

    /// Create a tag, recording a diagnostic on failure
    pub async fn create(&self, label: &str, diags: &mut Diagnostics) -> Option<Tag> {
        match self.client.create_tag(label).await {
            Ok(tag) => {
                tracing::debug!(id = tag.id, label = %tag.label, "created tag");
                Some(tag)
            }
            Err(err) => {
                diags.add_error(
                    CLIENT_ERROR,
                    diag::client_error_detail("create", Self::TYPE_NAME, &err),
                );
                None
            }
        }
    }

    /// Read a tag by id, recording a diagnostic on failure
    pub async fn read(&self, id: u64, diags: &mut Diagnostics) -> Option<Tag> {
        match self.client.get_tag(id).await {
            Ok(tag) => Some(tag),
            Err(err) => {
                diags.add_error(
                    CLIENT_ERROR,
                    diag::client_error_detail("read", Self::TYPE_NAME, &err),
                );
                None
            }
        }
    }

    /// Replace a tag's label, recording a diagnostic on failure
    pub async fn update(&self, tag: &Tag, diags: &mut Diagnostics) -> Option<Tag> {
        if tag.id == 0 {
            diags.add_error(
                RESOURCE_ERROR,
                format!("cannot update {} without a server-assigned id", Self::TYPE_NAME),
            );
            return None;
        }

        match self.client.update_tag(tag).await {
            Ok(tag) => {
                tracing::debug!(id = tag.id, label = %tag.label, "updated tag");
                Some(tag)
            }
            Err(err) => {
                diags.add_error(
                    CLIENT_ERROR,
                    diag::client_error_detail("update", Self::TYPE_NAME, &err),
                );
                None
            }
        }
    }

    /// Delete a tag by id; true when the server accepted the delete
    pub async fn delete(&self, id: u64, diags: &mut Diagnostics) -> bool {
        match self.client.delete_tag(id).await {
            Ok(()) => {
                tracing::debug!(id, "deleted tag");
                true
            }
            Err(err) => {
                diags.add_error(
                    CLIENT_ERROR,
                    diag::client_error_detail("delete", Self::TYPE_NAME, &err),
                );
                false
            }
        }
    }
}
