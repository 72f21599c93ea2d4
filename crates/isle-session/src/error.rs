use thiserror::Error;

use isle_activity::ActivityError;
use isle_core::{ActorId, IsleError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no day has begun")]
    NoDay,

    #[error("unknown actor {0}")]
    UnknownActor(ActorId),

    #[error("configuration error: {0}")]
    Config(#[from] IsleError),

    #[error("activity catalogue error: {0}")]
    Activity(#[from] ActivityError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
