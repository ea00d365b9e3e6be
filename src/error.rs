use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Schema migration failed: {0}")]
    Migration(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("Failed to launch server: {0}")]
    Launch(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
