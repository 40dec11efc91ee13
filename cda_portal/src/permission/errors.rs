use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("Unknown permission token: {0}")]
    UnknownToken(String),

    #[error("Invalid permission table: {0}")]
    InvalidTable(String),

    #[error("Failed to read permission table {path}: {message}")]
    Io { path: String, message: String },
}
