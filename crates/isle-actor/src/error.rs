use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActorError {
    #[error("actor {0:?} is already on the roster")]
    DuplicateName(String),

    #[error("schedule entry parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ActorResult<T> = Result<T, ActorError>;
