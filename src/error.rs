//! Error types for the widget.
//!
//! [`RequestError`] is what the transport and the aggregation hand back to
//! the controller. [`CacheError`] stays local to the cache store; the
//! controller treats it as "no cached output".

/// Failure of a single API request, or of an aggregation built from them.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The API answered with an `invalid_request` payload, usually because
    /// the access token or client id is missing or expired.
    #[error("invalid request: {0}")]
    InvalidRequest(serde_json::Value),

    /// Network failure, transport timeout, or a body that is not the JSON
    /// we expect.
    #[error("transport error: {0}")]
    Transport(String),

    /// Anything else, e.g. a request that could not even be built.
    #[error("request error: {0}")]
    Other(String),
}

impl RequestError {
    /// True for the credential problem the controller reports to the user.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Other(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Failure to read or write the cached rendering.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias for request results.
pub type Result<T> = std::result::Result<T, RequestError>;
