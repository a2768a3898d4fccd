use serde::Deserialize;

/// Declared resource state
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Remove server tags absent from the declaration
    #[serde(default)]
    pub prune_tags: bool,
    /// Tags that must exist
    #[serde(default)]
    pub tags: Vec<TagSpec>,
    /// Root folders that must exist
    #[serde(default)]
    pub root_folders: Vec<RootFolderSpec>,
}

/// One declared tag
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagSpec {
    /// Tag label
    pub label: String,
}

/// One declared root folder
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootFolderSpec {
    /// Absolute path on the Lidarr server
    pub path: String,
}
