use reqwest::StatusCode;

/// Failure of a single fetch attempt. There is exactly one attempt per
/// call, so every variant is terminal.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}")]
    Status { status: StatusCode, body: String },

    #[error("invalid json body: {0}")]
    Decode(#[from] serde_json::Error),
}
