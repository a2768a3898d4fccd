use lidarr_client::{LidarrClient, MetadataProfile};

use crate::diag::{self, CLIENT_ERROR, DATA_SOURCE_ERROR, Diagnostics};

/// Lookup of a metadata profile by its name
pub struct MetadataProfileDataSource<'a> {
    client: &'a LidarrClient,
}

impl<'a> MetadataProfileDataSource<'a> {
    /// Data source type name used in diagnostics
    pub const TYPE_NAME: &'static str = "lidarr_metadata_profile";

    /// Wrap a client
    pub fn new(client: &'a LidarrClient) -> Self {
        Self { client }
    }

    /// Find the metadata profile with the exact name
    pub async fn find_by_name(&self, name: &str, diags: &mut Diagnostics) -> Option<MetadataProfile> {
        let profiles = match self.client.list_metadata_profiles().await {
            Ok(profiles) => profiles,
            Err(err) => {
                diags.add_error(
                    CLIENT_ERROR,
                    diag::client_error_detail("read", Self::TYPE_NAME, &err),
                );
                return None;
            }
        };

        let Some(profile) = profiles.into_iter().find(|p| p.name == name) else {
            diags.add_error(
                DATA_SOURCE_ERROR,
                diag::not_found_detail(Self::TYPE_NAME, "name", name),
            );
            return None;
        };

        tracing::debug!(id = profile.id, name = %profile.name, "matched metadata profile");
        Some(profile)
    }
}
