//! Plan and apply: converge a server on the declared state
//!
//! Planning is a pure diff; execution runs the planned operations through
//! the resource types, continuing past individual failures so one bad
//! entry never hides the rest of the run

use lidarr_client::{LidarrClient, RootFolder, Tag};
use lidarr_config::ResourcesConfig;

use crate::diag::{self, CLIENT_ERROR, Diagnostics};
use crate::resource::{RootFolderResource, TagResource};

/// Declared state an apply run converges on
#[derive(Debug, Clone, Default)]
pub struct DesiredState {
    /// Tag labels that must exist
    pub tags: Vec<String>,
    /// Root folder paths that must exist
    pub root_folders: Vec<String>,
    /// Remove server tags absent from the declaration
    pub prune_tags: bool,
}

impl From<&ResourcesConfig> for DesiredState {
    fn from(resources: &ResourcesConfig) -> Self {
        Self {
            tags: resources.tags.iter().map(|t| t.label.clone()).collect(),
            root_folders: resources.root_folders.iter().map(|f| f.path.clone()).collect(),
            prune_tags: resources.prune_tags,
        }
    }
}

/// Server-side state relevant to planning
#[derive(Debug, Clone, Default)]
pub struct ServerState {
    /// Tags currently on the server
    pub tags: Vec<Tag>,
    /// Root folders currently registered
    pub root_folders: Vec<RootFolder>,
}

/// Operations that converge the server on the declared state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    /// Tag labels to create
    pub create_tags: Vec<String>,
    /// Existing tags to remove, prune only
    pub remove_tags: Vec<Tag>,
    /// Root folder paths to register
    pub create_root_folders: Vec<String>,
}

impl Plan {
    /// Whether the plan contains no operations
    pub fn is_empty(&self) -> bool {
        self.create_tags.is_empty() && self.remove_tags.is_empty() && self.create_root_folders.is_empty()
    }

    /// Total number of planned operations
    pub fn operation_count(&self) -> usize {
        self.create_tags.len() + self.remove_tags.len() + self.create_root_folders.len()
    }
}

/// Outcome of an apply run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Entities created
    pub created: usize,
    /// Entities removed
    pub removed: usize,
    /// Operations that failed and were recorded as diagnostics
    pub failed: usize,
}

/// Read the server state needed for planning
///
/// Returns `None` when either listing fails; planning against partial
/// state could produce destructive operations
pub async fn fetch_state(client: &LidarrClient, diags: &mut Diagnostics) -> Option<ServerState> {
    let tags = match client.list_tags().await {
        Ok(tags) => tags,
        Err(err) => {
            diags.add_error(
                CLIENT_ERROR,
                diag::client_error_detail("read", TagResource::TYPE_NAME, &err),
            );
            return None;
        }
    };

    let root_folders = match client.list_root_folders().await {
        Ok(folders) => folders,
        Err(err) => {
            diags.add_error(
                CLIENT_ERROR,
                diag::client_error_detail("read", RootFolderResource::TYPE_NAME, &err),
            );
            return None;
        }
    };

    Some(ServerState { tags, root_folders })
}

/// Compute the diff between declared and server state
///
/// Tags match by label, ASCII case-insensitively since Lidarr stores
/// labels lowercase; root folders match by exact path. Tags are removed
/// only under `prune_tags`; root folders are never removed.
pub fn plan(desired: &DesiredState, actual: &ServerState) -> Plan {
    let create_tags = desired
        .tags
        .iter()
        .filter(|label| !actual.tags.iter().any(|t| t.label.eq_ignore_ascii_case(label.as_str())))
        .cloned()
        .collect();

    let remove_tags = if desired.prune_tags {
        actual
            .tags
            .iter()
            .filter(|t| !desired.tags.iter().any(|label| t.label.eq_ignore_ascii_case(label.as_str())))
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    let create_root_folders = desired
        .root_folders
        .iter()
        .filter(|path| !actual.root_folders.iter().any(|f| f.path == path.as_str()))
        .cloned()
        .collect();

    Plan {
        create_tags,
        remove_tags,
        create_root_folders,
    }
}

/// Execute a plan, continuing past individual failures
pub async fn execute(client: &LidarrClient, plan: &Plan, diags: &mut Diagnostics) -> ApplySummary {
    let mut summary = ApplySummary::default();

    let tags = TagResource::new(client);
    for label in &plan.create_tags {
        if tags.create(label, diags).await.is_some() {
            summary.created += 1;
        } else {
            summary.failed += 1;
        }
    }
    for tag in &plan.remove_tags {
        if tags.delete(tag.id, diags).await {
            summary.removed += 1;
        } else {
            summary.failed += 1;
        }
    }

    let root_folders = RootFolderResource::new(client);
    for path in &plan.create_root_folders {
        if root_folders.create(path, diags).await.is_some() {
            summary.created += 1;
        } else {
            summary.failed += 1;
        }
    }

    summary
}
