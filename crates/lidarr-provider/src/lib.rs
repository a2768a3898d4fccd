#![allow(clippy::must_use_candidate)]

//! Resource and data-source layer for lidarrctl
//!
//! Wraps the Lidarr API client in operations that collect operator-facing
//! diagnostics instead of propagating errors: a failed API call becomes a
//! formatted message, never a panic or an early abort

pub mod apply;
pub mod data;
pub mod diag;
pub mod resource;

pub use apply::{ApplySummary, DesiredState, Plan, ServerState};
pub use diag::{Diagnostic, Diagnostics, NotFoundError, Severity};
