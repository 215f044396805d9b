use thiserror::Error;

/// Errors produced by the news providers and the model client.
///
/// These never cross the pipeline's public boundary: the orchestration
/// step converts each one into a neutral [`crate::SentimentResult`].
#[derive(Debug, Error)]
pub enum SentimentError {
    /// Network or TLS failure, timeout, or non-2xx status from the
    /// underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote service answered 2xx but the payload was semantically
    /// invalid (e.g. a chat completion with no message content).
    #[error("API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
