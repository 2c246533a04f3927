use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed coordinate key `{0}`: expected `<row>,<col>` with non-negative integers")]
    MalformedKey(String),

    #[error("matrix has no cells")]
    EmptyMatrix,

    #[error("matrix shape mismatch: {rows}x{cols} cannot hold {len} values")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },
}
