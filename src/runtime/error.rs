use crate::formats::IoError;
use crate::model::CoreError;
use crate::workflow::ReplayError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("mask/matrix error: {0}")]
    Core(#[from] CoreError),

    #[error("I/O service error: {0}")]
    Io(#[from] IoError),

    #[error("replay service error: {0}")]
    Replay(#[from] ReplayError),

    #[error("invalid configuration: {0}")]
    Config(String),
}
