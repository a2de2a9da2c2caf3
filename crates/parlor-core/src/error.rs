use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid snapshot json: {0}")]
    Json(#[from] serde_json::Error),
}
