//! Error types for the completion client.

use thiserror::Error;

/// Failure to obtain an answer from the completion API.
///
/// None of these reach the texter: the relay logs them and replies with a
/// fixed apology instead.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The request could not be sent or the response could not be read
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The API answered with a non-success status
    #[error("Completion API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    /// The API answered without any message content
    #[error("Completion API returned no message content")]
    EmptyResponse,
}

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;
