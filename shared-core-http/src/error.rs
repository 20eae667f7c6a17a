use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("failed to encode JSON body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to build response: {0}")]
    Response(#[from] http::Error),
}

pub type Result<T> = std::result::Result<T, HttpError>;
