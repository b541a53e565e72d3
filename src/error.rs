use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Invalid category: {0}. Valid categories: work, travel")]
    InvalidCategory(String),

    #[error("To-do not found: {0}")]
    ItemNotFound(String),

    #[error("Use --force to delete in non-interactive mode")]
    ConfirmationRequired,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;
