use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("invalid activity catalogue: {0}")]
    Invalid(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ActivityResult<T> = Result<T, ActivityError>;
