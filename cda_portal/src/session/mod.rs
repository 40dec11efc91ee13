mod config;
mod errors;
mod main;
mod types;

pub use config::SESSION_COOKIE_NAME; // Required for cookie configuration
pub use errors::SessionError;
pub use main::{
    RawCookieHeaderSource, SessionSource, TypedCookieSource, clear_session_cookie_headers,
    decode_session, encode_session, extract_cookie_value, resolve_current_session,
    resolve_with_sources, session_cookie_headers, session_from_cookie_header,
};
pub use types::{ROLE_ADMIN, ROLE_MEMBER, SessionUser};
