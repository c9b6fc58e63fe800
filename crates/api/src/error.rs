#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Status code: {0}")]
    StatusCode(u16),

    #[error("No board code in selection {0:?}")]
    InvalidSelection(String),

    #[error("Invalid response")]
    InvalidResponse,
}
