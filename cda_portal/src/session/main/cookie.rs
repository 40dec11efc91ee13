use headers::HeaderMapExt;
use http::header::{COOKIE, HeaderMap};

use crate::session::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE};
use crate::session::errors::SessionError;
use crate::session::types::SessionUser;
use crate::utils::{CookieAttributes, header_set_cookie};

use super::codec::{decode_session, encode_session};

/// Find the value of the cookie `name` in a raw `Cookie` header
///
/// Pairs are separated by `;`. Only the first `=` of a pair separates the
/// name from the value, so `simple_session=abc=def` yields `abc=def`.
pub fn extract_cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == name => Some(value.to_string()),
            _ => None,
        })
}

/// Session cookie value read through the typed `Cookie` header
pub(super) fn typed_cookie_value(headers: &HeaderMap) -> Result<Option<String>, SessionError> {
    let cookies = headers
        .typed_try_get::<headers::Cookie>()
        .map_err(|e| SessionError::Header(e.to_string()))?;

    Ok(cookies.and_then(|cookies| {
        cookies
            .get(SESSION_COOKIE_NAME.as_str())
            .map(str::to_string)
    }))
}

/// Session cookie value found by scanning every raw `Cookie` header
pub(super) fn raw_cookie_value(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| extract_cookie_value(header, SESSION_COOKIE_NAME.as_str()))
}

/// Decode the session from the request headers without suspending
///
/// Used where the request headers are already at hand, such as the route
/// guard. Tries the typed accessor first and the raw header scan second.
pub fn session_from_cookie_header(headers: &HeaderMap) -> Option<SessionUser> {
    let typed = match typed_cookie_value(headers) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "Typed cookie access failed, scanning raw header");
            None
        }
    };

    if let Some(session) = decode_session(typed.as_deref()) {
        return Some(session);
    }

    decode_session(raw_cookie_value(headers).as_deref())
}

/// Build the `Set-Cookie` header that starts a session
pub fn session_cookie_headers(session: &SessionUser) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        &encode_session(session),
        CookieAttributes {
            max_age: *SESSION_COOKIE_MAX_AGE,
            secure: *SESSION_COOKIE_SECURE,
        },
    )?;
    Ok(headers)
}

/// Build the `Set-Cookie` header that ends a session
pub fn clear_session_cookie_headers() -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        "",
        CookieAttributes {
            max_age: Some(0),
            secure: *SESSION_COOKIE_SECURE,
        },
    )?;
    Ok(headers)
}
