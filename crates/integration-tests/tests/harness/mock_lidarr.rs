//! Mock Lidarr server for integration tests
//!
//! Implements the v1 endpoints lidarrctl touches, backed by in-memory
//! state, including the `X-Api-Key` check a real server performs

use std::collections::{BTreeMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;

/// API key the mock accepts
pub const API_KEY: &str = "test-api-key";

/// Mock Lidarr server with in-memory tag and root folder state
pub struct MockLidarr {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    next_id: AtomicU64,
    tags: Mutex<BTreeMap<u64, String>>,
    root_folders: Mutex<BTreeMap<u64, String>>,
    /// Paths accepted for root folder creation, `None` accepts all
    valid_root_folders: Option<HashSet<String>>,
}

impl MockLidarr {
    /// Start a mock that accepts any root folder path
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock that only accepts the given root folder paths,
    /// rejecting others the way a real server rejects unreachable paths
    pub async fn start_with_valid_roots(paths: &[&str]) -> anyhow::Result<Self> {
        Self::start_inner(Some(paths.iter().map(|&p| p.to_owned()).collect())).await
    }

    async fn start_inner(valid_root_folders: Option<HashSet<String>>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            next_id: AtomicU64::new(1),
            tags: Mutex::new(BTreeMap::new()),
            root_folders: Mutex::new(BTreeMap::new()),
            valid_root_folders,
        });

        let app = Router::new()
            .route("/api/v1/system/status", routing::get(system_status))
            .route("/api/v1/tag", routing::get(list_tags).post(create_tag))
            .route(
                "/api/v1/tag/{id}",
                routing::get(get_tag).put(update_tag).delete(delete_tag),
            )
            .route(
                "/api/v1/rootfolder",
                routing::get(list_root_folders).post(create_root_folder),
            )
            .route("/api/v1/rootfolder/{id}", routing::delete(delete_root_folder))
            .route("/api/v1/metadataprofile", routing::get(list_metadata_profiles))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for pointing a client at the mock
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Snapshot of current tag labels, ordered by id
    pub fn tag_labels(&self) -> Vec<String> {
        self.state.tags.lock().unwrap().values().cloned().collect()
    }

    /// Snapshot of current root folder paths, ordered by id
    pub fn root_folder_paths(&self) -> Vec<String> {
        self.state.root_folders.lock().unwrap().values().cloned().collect()
    }
}

impl Drop for MockLidarr {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Handlers --

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("X-Api-Key").and_then(|v| v.to_str().ok()) == Some(API_KEY)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Unauthorized" }))).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "NotFound" }))).into_response()
}

async fn system_status(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    Json(json!({ "appName": "Lidarr", "version": "2.13.3.4711" })).into_response()
}

async fn list_tags(headers: HeaderMap, State(state): State<Arc<MockState>>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    let tags: Vec<_> = state
        .tags
        .lock()
        .unwrap()
        .iter()
        .map(|(id, label)| json!({ "id": id, "label": label }))
        .collect();
    Json(json!(tags)).into_response()
}

async fn get_tag(
    headers: HeaderMap,
    State(state): State<Arc<MockState>>,
    Path(id): Path<u64>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    match state.tags.lock().unwrap().get(&id) {
        Some(label) => Json(json!({ "id": id, "label": label })).into_response(),
        None => not_found(),
    }
}

async fn create_tag(
    headers: HeaderMap,
    State(state): State<Arc<MockState>>,
    Json(body): Json<TagBody>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    let id = state.next_id.fetch_add(1, Ordering::Relaxed);
    // Lidarr lowercases labels on write
    let label = body.label.to_lowercase();
    state.tags.lock().unwrap().insert(id, label.clone());

    (StatusCode::CREATED, Json(json!({ "id": id, "label": label }))).into_response()
}

async fn update_tag(
    headers: HeaderMap,
    State(state): State<Arc<MockState>>,
    Path(id): Path<u64>,
    Json(body): Json<TagBody>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    let mut tags = state.tags.lock().unwrap();
    if !tags.contains_key(&id) {
        return not_found();
    }

    let label = body.label.to_lowercase();
    tags.insert(id, label.clone());
    Json(json!({ "id": id, "label": label })).into_response()
}

async fn delete_tag(
    headers: HeaderMap,
    State(state): State<Arc<MockState>>,
    Path(id): Path<u64>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    match state.tags.lock().unwrap().remove(&id) {
        Some(_) => Json(json!({})).into_response(),
        None => not_found(),
    }
}

async fn list_root_folders(headers: HeaderMap, State(state): State<Arc<MockState>>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    let folders: Vec<_> = state
        .root_folders
        .lock()
        .unwrap()
        .iter()
        .map(|(id, path)| root_folder_json(*id, path))
        .collect();
    Json(json!(folders)).into_response()
}

async fn create_root_folder(
    headers: HeaderMap,
    State(state): State<Arc<MockState>>,
    Json(body): Json<RootFolderBody>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    if let Some(ref valid) = state.valid_root_folders {
        if !valid.contains(&body.path) {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Folder does not exist" })),
            )
                .into_response();
        }
    }

    let id = state.next_id.fetch_add(1, Ordering::Relaxed);
    state.root_folders.lock().unwrap().insert(id, body.path.clone());

    (StatusCode::CREATED, Json(root_folder_json(id, &body.path))).into_response()
}

async fn delete_root_folder(
    headers: HeaderMap,
    State(state): State<Arc<MockState>>,
    Path(id): Path<u64>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    match state.root_folders.lock().unwrap().remove(&id) {
        Some(_) => Json(json!({})).into_response(),
        None => not_found(),
    }
}

async fn list_metadata_profiles(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    Json(json!([
        { "id": 1, "name": "Standard" },
        { "id": 2, "name": "None" },
    ]))
    .into_response()
}

fn root_folder_json(id: u64, path: &str) -> serde_json::Value {
    json!({
        "id": id,
        "path": path,
        "accessible": true,
        "freeSpace": 10_737_418_240_u64,
    })
}

// -- Wire types --

#[derive(Debug, Deserialize)]
struct TagBody {
    label: String,
}

#[derive(Debug, Deserialize)]
struct RootFolderBody {
    path: String,
}
