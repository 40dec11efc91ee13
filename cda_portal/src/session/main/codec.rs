use crate::session::types::SessionUser;

/// Serialize a session into the value stored in the session cookie
///
/// The session is written as JSON and percent-encoded so that the value only
/// holds characters allowed in a cookie.
pub fn encode_session(session: &SessionUser) -> String {
    // Serializing a struct of strings cannot fail
    let json = serde_json::to_string(session).unwrap_or_default();
    urlencoding::encode(&json).into_owned()
}

/// Parse a session cookie value back into a session
///
/// Returns `None` when the value is absent, empty, not valid JSON, of the
/// wrong shape, or missing its id or username. This function never fails:
/// every problem is treated as "no session".
pub fn decode_session(raw: Option<&str>) -> Option<SessionUser> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    let json = match urlencoding::decode(raw) {
        Ok(json) => json,
        Err(e) => {
            tracing::debug!(error = %e, "Session cookie is not valid percent-encoded UTF-8");
            return None;
        }
    };

    let session: SessionUser = match serde_json::from_str(&json) {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!(error = %e, "Session cookie does not hold a session payload");
            return None;
        }
    };

    if !session.is_complete() {
        tracing::debug!("Session cookie is missing its id or username");
        return None;
    }

    Some(session)
}
