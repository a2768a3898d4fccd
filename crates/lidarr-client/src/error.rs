/// Client-specific result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors from the Lidarr client
///
/// The `Api` variant is the only one carrying a structured server
/// response; it is built in exactly one place, when a request comes back
/// with a non-success status. Everything else is a plain message-only
/// error.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success response
    #[error("lidarr API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message parsed from the response body, may be empty
        message: String,
        /// Raw response body, kept verbatim for diagnostics
        body: String,
    },

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Any other failure adopted at the client boundary
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
