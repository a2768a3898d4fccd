//! Read-only lookups of Lidarr entities by one field
//!
//! A miss is not an error at the client level; it becomes a standardized
//! not-found diagnostic

mod metadata_profile;
mod root_folder;
mod tag;

pub use metadata_profile::MetadataProfileDataSource;
pub use root_folder::RootFolderDataSource;
pub use tag::TagDataSource;
