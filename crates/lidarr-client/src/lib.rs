#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed Rust HTTP client for the Lidarr v1 API
//!
//! Covers the endpoints lidarrctl manages: tags, root folders, metadata
//! profiles, and system status

mod client;
pub mod error;
pub mod types;

pub use client::LidarrClient;
pub use error::{ClientError, Result};
pub use types::*;
