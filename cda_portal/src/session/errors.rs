use thiserror::Error;

use crate::utils::UtilError;

/// Errors raised while reading or writing the session cookie
///
/// Decoding never surfaces these to callers; they only travel between the
/// session sources and the resolver, which logs them and moves on.
#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Header error: {0}")]
    Header(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
