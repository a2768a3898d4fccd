use lidarr_client::{LidarrClient, Tag};

use crate::diag::{self, CLIENT_ERROR, DATA_SOURCE_ERROR, Diagnostics};

/// Lookup of a tag by its label
pub struct TagDataSource<'a> {
    client: &'a LidarrClient,
}

impl<'a> TagDataSource<'a> {
    /// Data source type name used in diagnostics
    pub const TYPE_NAME: &'static str = "lidarr_tag";

    /// Wrap a client
    pub fn new(client: &'a LidarrClient) -> Self {
        Self { client }
    }

    /// Find the tag with the given label
    ///
    /// Labels are matched ASCII case-insensitively since Lidarr stores
    /// them lowercase
    pub async fn find_by_label(&self, label: &str, diags: &mut Diagnostics) -> Option<Tag> {
        let tags = match self.client.list_tags().await {
            Ok(tags) => tags,
            Err(err) => {
                diags.add_error(
                    CLIENT_ERROR,
                    diag::client_error_detail("read", Self::TYPE_NAME, &err),
                );
                return None;
            }
        };

        let Some(tag) = tags.into_iter().find(|t| t.label.eq_ignore_ascii_case(label)) else {
            diags.add_error(
                DATA_SOURCE_ERROR,
                diag::not_found_detail(Self::TYPE_NAME, "label", label),
            );
            return None;
        };

        tracing::debug!(id = tag.id, label = %tag.label, "matched tag");
        Some(tag)
    }
}
