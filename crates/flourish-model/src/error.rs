use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid submission json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
