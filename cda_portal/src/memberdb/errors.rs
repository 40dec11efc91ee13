use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum MemberError {
    #[error("Member not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Password hashing error: {0}")]
    Password(String),
}

impl From<sqlx::Error> for MemberError {
    fn from(err: sqlx::Error) -> Self {
        MemberError::Storage(err.to_string())
    }
}

impl From<argon2::Error> for MemberError {
    fn from(err: argon2::Error) -> Self {
        MemberError::Password(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for MemberError {
    fn from(err: argon2::password_hash::Error) -> Self {
        MemberError::Password(err.to_string())
    }
}
