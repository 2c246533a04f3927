use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReplayError>;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("replay script parse failure: {0}")]
    Parse(String),

    #[error("replay I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("replay serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("replay YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
}
