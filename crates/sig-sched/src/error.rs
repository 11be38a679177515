use sig_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for SchedError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidInput(msg) => SchedError::InvalidInput(msg),
        }
    }
}

pub type SchedResult<T> = Result<T, SchedError>;
