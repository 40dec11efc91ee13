use async_trait::async_trait;
use http::header::HeaderMap;

use crate::session::errors::SessionError;
use crate::session::types::SessionUser;

use super::codec::decode_session;
use super::cookie::{raw_cookie_value, typed_cookie_value};

/// A place the raw session cookie value can be read from
///
/// Sources are tried in order by [`resolve_with_sources`]. A source that fails
/// or finds nothing simply hands over to the next one.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Read the raw (still encoded) session cookie value
    async fn raw_session(&self, headers: &HeaderMap) -> Result<Option<String>, SessionError>;
}

/// Reads the session cookie through the typed `Cookie` header accessor
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedCookieSource;

#[async_trait]
impl SessionSource for TypedCookieSource {
    fn name(&self) -> &'static str {
        "typed-cookie"
    }

    async fn raw_session(&self, headers: &HeaderMap) -> Result<Option<String>, SessionError> {
        typed_cookie_value(headers)
    }
}

/// Scans the raw `Cookie` headers for the session cookie
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCookieHeaderSource;

#[async_trait]
impl SessionSource for RawCookieHeaderSource {
    fn name(&self) -> &'static str {
        "raw-cookie-header"
    }

    async fn raw_session(&self, headers: &HeaderMap) -> Result<Option<String>, SessionError> {
        Ok(raw_cookie_value(headers))
    }
}

static DEFAULT_SOURCES: [&dyn SessionSource; 2] = [&TypedCookieSource, &RawCookieHeaderSource];

/// Resolve the session of the current request
///
/// Reads the session cookie through the typed accessor and, when that fails
/// or yields nothing usable, through a manual scan of the raw `Cookie`
/// header. Returns `None` once every source is exhausted.
pub async fn resolve_current_session(headers: &HeaderMap) -> Option<SessionUser> {
    resolve_with_sources(&DEFAULT_SOURCES, headers).await
}

/// Resolve the session from an explicit, ordered list of sources
#[tracing::instrument(skip_all)]
pub async fn resolve_with_sources(
    sources: &[&dyn SessionSource],
    headers: &HeaderMap,
) -> Option<SessionUser> {
    for source in sources {
        match source.raw_session(headers).await {
            Ok(Some(raw)) => {
                if let Some(session) = decode_session(Some(&raw)) {
                    tracing::trace!(source = source.name(), username = %session.username, "Session resolved");
                    return Some(session);
                }
                tracing::debug!(source = source.name(), "Session cookie did not decode");
            }
            Ok(None) => {
                tracing::trace!(source = source.name(), "No session cookie");
            }
            Err(e) => {
                tracing::debug!(source = source.name(), error = %e, "Session source failed");
            }
        }
    }
    None
}
