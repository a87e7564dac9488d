use crate::client::BoxError;
use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build request for {uri}: {reason}")]
    InvalidRequest { uri: String, reason: String },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("request to {uri} failed: {source}")]
    Transport {
        uri: String,
        #[source]
        source: BoxError,
    },

    #[error("server returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
