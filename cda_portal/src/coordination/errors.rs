use thiserror::Error;

use crate::memberdb::MemberError;
use crate::permission::PermissionError;
use crate::session::SessionError;
use crate::storage::StorageError;

/// Errors of the login, logout, seeding and audit operations
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// Username or password missing or empty
    #[error("Username and password are required")]
    MissingCredentials,

    /// Unknown username or wrong password; the two are not told apart
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Member error: {0}")]
    MemberError(MemberError),

    #[error("Session error: {0}")]
    SessionError(SessionError),

    #[error("Permission error: {0}")]
    PermissionError(PermissionError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::MissingCredentials | Self::InvalidCredentials => {
                tracing::info!("Login rejected: {}", self)
            }
            Self::Unauthorized => tracing::warn!("Unauthorized access"),
            _ => tracing::error!("{}", self),
        }
        self
    }
}

impl From<MemberError> for CoordinationError {
    fn from(err: MemberError) -> Self {
        let error = Self::MemberError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<PermissionError> for CoordinationError {
    fn from(err: PermissionError) -> Self {
        let error = Self::PermissionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<StorageError> for CoordinationError {
    fn from(err: StorageError) -> Self {
        let error = Self::Database(err.to_string());
        tracing::error!("{}", error);
        error
    }
}
