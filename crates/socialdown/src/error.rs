use thiserror::Error;

#[derive(Debug, Error)]
pub enum SocialdownError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API Error: {status_code}")]
    Api { status_code: u16 },

    #[error("Failed to parse JSON response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
