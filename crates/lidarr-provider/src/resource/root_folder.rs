use lidarr_client::{LidarrClient, RootFolder};

use crate::diag::{self, CLIENT_ERROR, Diagnostics};

/// Managed Lidarr root folder
///
/// The API has no root folder update; a path change is a delete and a
/// create
pub struct RootFolderResource<'a> {
    client: &'a LidarrClient,
}

impl<'a> RootFolderResource<'a> {
    /// Resource type name used in diagnostics
    pub const TYPE_NAME: &'static str = "lidarr_root_folder";

    /// Wrap a client
    pub fn new(client: &'a LidarrClient) -> Self {
        Self { client }
    }

    /// Register a root folder path, recording a diagnostic on failure
    pub async fn create(&self, path: &str, diags: &mut Diagnostics) -> Option<RootFolder> {
        match self.client.create_root_folder(path).await {
            Ok(folder) => {
                tracing::debug!(id = folder.id, path = %folder.path, "created root folder");
                Some(folder)
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

    /// List registered root folders, recording a diagnostic on failure
    pub async fn list(&self, diags: &mut Diagnostics) -> Option<Vec<RootFolder>> {
        match self.client.list_root_folders().await {
            Ok(folders) => Some(folders),
            Err(err) => {
                diags.add_error(
                    CLIENT_ERROR,
                    diag::client_error_detail("read", Self::TYPE_NAME, &err),
                );
                None
            }
        }
    }

    /// Unregister a root folder by id; true when the server accepted it
    pub async fn delete(&self, id: u64, diags: &mut Diagnostics) -> bool {
        match self.client.delete_root_folder(id).await {
            Ok(()) => {
                tracing::debug!(id, "deleted root folder");
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
