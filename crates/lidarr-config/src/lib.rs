#![allow(clippy::must_use_candidate)]

//! Configuration for lidarrctl
//!
//! A single TOML file declares the connection and the desired resources.
//! `{{ env.VAR }}` placeholders are expanded before deserialization, so
//! secrets stay out of the file itself.

mod connection;
mod env;
mod loader;
mod resources;

use serde::Deserialize;

pub use connection::ConnectionConfig;
pub use resources::{ResourcesConfig, RootFolderSpec, TagSpec};

/// Top-level lidarrctl configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lidarr server connection
    pub connection: ConnectionConfig,
    /// Declared resource state
    #[serde(default)]
    pub resources: ResourcesConfig,
}
