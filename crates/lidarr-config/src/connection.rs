use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Lidarr server connection settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// Base URL of the Lidarr server
    pub url: Url,
    /// API key sent as `X-Api-Key`, never logged
    pub api_key: SecretString,
}
