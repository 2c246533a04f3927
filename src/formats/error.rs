use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV failure: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid number `{token}` at row {row}, column {col}")]
    InvalidNumber {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("core matrix failure: {0}")]
    Core(#[from] CoreError),
}
