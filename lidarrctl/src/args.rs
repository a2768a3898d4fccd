use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Declarative provisioning for Lidarr
#[derive(Debug, Parser)]
#[command(name = "lidarrctl", about = "Reconcile declared tags and root folders against a Lidarr server")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "lidarrctl.toml", env = "LIDARRCTL_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do with the declared state
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify connectivity and report the server version
    Check,
    /// Show the operations apply would perform
    Plan,
    /// Converge the server on the declared state
    Apply,
}
