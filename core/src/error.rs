use thiserror::Error;

/// Failures a [`Backend`](crate::Backend) can report for a single request.
///
/// The store only keeps the `Display` text of these, so the messages are
/// written for people, not for matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response (DNS, connection, timeout).
    #[error("Network Error: {0}")]
    Transport(String),

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// The body was not the JSON shape the caller asked for.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
