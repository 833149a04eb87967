use thiserror::Error;

/// Anything that can go wrong while building a status response.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to construct HTTP response: {0}")]
    ResponseBuild(#[from] http::Error),
}
