use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Todo store at {location} is corrupt: {cause}")]
    CorruptStore { location: String, cause: String },

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
