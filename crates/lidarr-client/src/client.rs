use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{ClientError, Result};
use crate::types::{MetadataProfile, RootFolder, SystemStatus, Tag};

/// Header Lidarr authenticates with
const API_KEY_HEADER: &str = "X-Api-Key";

/// Typed client for the Lidarr v1 API
///
/// Cheap to clone; all clones share the same connection pool
#[derive(Debug, Clone)]
pub struct LidarrClient {
    base_url: Url,
    http: reqwest::Client,
    api_key: SecretString,
}

impl LidarrClient {
    /// Create a new client pointing at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid
    pub fn new(base_url: &str, api_key: SecretString) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "invalid base URL: {base_url} cannot carry an API path"
            )));
        }

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
            api_key,
        })
    }

    /// Base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -- System --

    /// Fetch the server identity and version
    pub async fn system_status(&self) -> Result<SystemStatus> {
        let response = self.request(Method::GET, "system/status").send().await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    // -- Tags --

    /// List all tags
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let response = self.request(Method::GET, "tag").send().await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Fetch a single tag by id
    pub async fn get_tag(&self, id: u64) -> Result<Tag> {
        let response = self.request(Method::GET, &format!("tag/{id}")).send().await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Create a tag with the given label
    pub async fn create_tag(&self, label: &str) -> Result<Tag> {
        let response = self
            .request(Method::POST, "tag")
            .json(&serde_json::json!({ "label": label }))
            .send()
            .await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Replace a tag's label
    pub async fn update_tag(&self, tag: &Tag) -> Result<Tag> {
        let response = self
            .request(Method::PUT, &format!("tag/{}", tag.id))
            .json(tag)
            .send()
            .await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Delete a tag by id
    pub async fn delete_tag(&self, id: u64) -> Result<()> {
        let response = self.request(Method::DELETE, &format!("tag/{id}")).send().await?;
        handle_error(response).await?;
        Ok(())
    }

    // -- Root folders --

    /// List all root folders
    pub async fn list_root_folders(&self) -> Result<Vec<RootFolder>> {
        let response = self.request(Method::GET, "rootfolder").send().await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Register a root folder path
    ///
    /// The server rejects paths it cannot reach
    pub async fn create_root_folder(&self, path: &str) -> Result<RootFolder> {
        let response = self
            .request(Method::POST, "rootfolder")
            .json(&serde_json::json!({ "path": path }))
            .send()
            .await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Unregister a root folder by id
    pub async fn delete_root_folder(&self, id: u64) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("rootfolder/{id}"))
            .send()
            .await?;
        handle_error(response).await?;
        Ok(())
    }

    // -- Metadata profiles --

    /// List all metadata profiles
    pub async fn list_metadata_profiles(&self) -> Result<Vec<MetadataProfile>> {
        let response = self.request(Method::GET, "metadataprofile").send().await?;
        handle_error(response).await?.json().await.map_err(Into::into)
    }

    /// Build an authenticated request for a path under `/api/v1`
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/api/v1/{path}"));

        self.http
            .request(method, url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
    }
}

// -- Helper functions --

/// Check an HTTP response for errors
///
/// A non-success status is turned into the structured `Api` error here,
/// and nowhere else; downstream code pattern-matches on the variant
/// instead of re-inspecting responses.
async fn handle_error(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = parse_error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_owned());

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
        body,
    })
}

/// Extract the `message` field from a Lidarr error body, if there is one
fn parse_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json["message"].as_str().map(ToOwned::to_owned)
}
