use thiserror::Error;

// * Unified Error type for the Network Layer.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0} response")]
    Status(u16),

    #[error("Empty response body ({0} bytes)")]
    EmptyResponse(usize),

    #[error("Invalid URL")]
    InvalidUrl,
}
