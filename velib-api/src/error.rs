/// Error types for fetching backend payloads
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a single request/response cycle.
///
/// Callers log these and keep whatever data they already display.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Network request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not the JSON shape we expected
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;

/// Decode a response body into a typed payload.
pub fn parse_payload<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
