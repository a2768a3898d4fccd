use lidarr_client::{LidarrClient, RootFolder};

use crate::diag::{self, CLIENT_ERROR, DATA_SOURCE_ERROR, Diagnostics};

/// Lookup of a root folder by its path
pub struct RootFolderDataSource<'a> {
    client: &'a LidarrClient,
}

impl<'a> RootFolderDataSource<'a> {
    /// Data source type name used in diagnostics
    pub const TYPE_NAME: &'static str = "lidarr_root_folder";

    /// Wrap a client
    pub fn new(client: &'a LidarrClient) -> Self {
        Self { client }
    }

    /// Find the root folder registered under the exact path
    pub async fn find_by_path(&self, path: &str, diags: &mut Diagnostics) -> Option<RootFolder> {
        let folders = match self.client.list_root_folders().await {
            Ok(folders) => folders,
            Err(err) => {
                diags.add_error(
                    CLIENT_ERROR,
                    diag::client_error_detail("read", Self::TYPE_NAME, &err),
                );
                return None;
            }
        };

        let Some(folder) = folders.into_iter().find(|f| f.path == path) else {
            diags.add_error(
                DATA_SOURCE_ERROR,
                diag::not_found_detail(Self::TYPE_NAME, "path", path),
            );
            return None;
        };

        tracing::debug!(id = folder.id, path = %folder.path, "matched root folder");
        Some(folder)
    }
}
