use serde::{Deserialize, Serialize};

/// Tag attachable to artists, indexers, and import lists
///
/// Lidarr stores labels lowercase regardless of the submitted casing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Server-assigned identifier
    #[serde(default)]
    pub id: u64,
    /// Tag label
    pub label: String,
}

/// Root folder music is imported under
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootFolder {
    /// Server-assigned identifier
    pub id: u64,
    /// Absolute path on the server
    pub path: String,
    /// Whether the server can reach the path
    #[serde(default)]
    pub accessible: bool,
    /// Free space in bytes, absent when the path is unreachable
    #[serde(default)]
    pub free_space: Option<u64>,
}

/// Metadata profile referenced by artists
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataProfile {
    /// Server-assigned identifier
    pub id: u64,
    /// Profile name
    pub name: String,
}

/// Subset of `/system/status` used for connectivity checks
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    /// Application name, "Lidarr" on a real server
    pub app_name: String,
    /// Server version string
    pub version: String,
}
