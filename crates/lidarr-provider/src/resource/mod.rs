//! Managed Lidarr resources
//!
//! Each resource wraps the client in the CRUD subset the API supports and
//! records a diagnostic instead of returning an error

mod root_folder;
mod tag;

pub use root_folder::RootFolderResource;
pub use tag::TagResource;
