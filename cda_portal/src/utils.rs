use http::header::{HeaderMap, SET_COOKIE};
use thiserror::Error;

/// Attributes attached to a `Set-Cookie` header
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CookieAttributes {
    pub(crate) max_age: Option<i64>,
    pub(crate) secure: bool,
}

pub(crate) fn header_set_cookie<'a>(
    headers: &'a mut HeaderMap,
    name: &str,
    value: &str,
    attributes: CookieAttributes,
) -> Result<&'a HeaderMap, UtilError> {
    let mut cookie = format!("{name}={value}; HttpOnly; SameSite=Lax; Path=/");
    if let Some(max_age) = attributes.max_age {
        cookie.push_str(&format!("; Max-Age={max_age}"));
    }
    if attributes.secure {
        cookie.push_str("; Secure");
    }
    tracing::trace!(cookie_name = %name, "Appending Set-Cookie header");
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(headers)
}

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Cookie error: {0}")]
    Cookie(String),
}
