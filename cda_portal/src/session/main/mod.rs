mod codec;
mod cookie;
mod source;

pub use codec::{decode_session, encode_session};
pub use cookie::{
    clear_session_cookie_headers, extract_cookie_value, session_cookie_headers,
    session_from_cookie_header,
};
pub use source::{
    RawCookieHeaderSource, SessionSource, TypedCookieSource, resolve_current_session,
    resolve_with_sources,
};
