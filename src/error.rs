#[derive(Debug, thiserror::Error)]
pub enum BearlyError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend rejected request: {0}")]
    Rejected(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BearlyError>;
