use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

use crate::memberdb::{MemberSearchField, MemberStore, verify_password_or_dummy};
use crate::permission::permission_table;
use crate::session::{SessionUser, clear_session_cookie_headers, session_cookie_headers};

use super::errors::CoordinationError;

/// Check a username and password against the member table
///
/// On success returns the session and the `Set-Cookie` headers carrying it.
/// Unknown usernames and wrong passwords both fail with
/// [`CoordinationError::InvalidCredentials`] after the same amount of work.
#[tracing::instrument(skip(password))]
pub async fn login_core(
    username: &str,
    password: SecretString,
) -> Result<(SessionUser, HeaderMap), CoordinationError> {
    let username = username.trim();
    if username.is_empty() || password.expose_secret().is_empty() {
        return Err(CoordinationError::MissingCredentials.log());
    }

    let member = MemberStore::get_member_by(MemberSearchField::Username(username.to_string()))
        .await?;
    let stored_hash = member.as_ref().map(|m| m.password_hash.clone());

    if !verify_password_or_dummy(stored_hash, password).await? {
        return Err(CoordinationError::InvalidCredentials.log());
    }
    let Some(member) = member else {
        return Err(CoordinationError::InvalidCredentials.log());
    };

    if let Some(position) = member.position.as_deref() {
        if permission_table().is_some_and(|table| !table.is_known_position(position)) {
            tracing::warn!(
                username = %member.username,
                position = %position,
                "Member logged in with a position unknown to the permission table"
            );
        }
    }

    let session = SessionUser::from(member);
    let headers = session_cookie_headers(&session)?;

    tracing::info!(
        member_id = %session.id,
        username = %session.username,
        "Member logged in"
    );
    Ok((session, headers))
}

/// `Set-Cookie` headers that expire the session cookie
pub fn logout_core() -> Result<HeaderMap, CoordinationError> {
    let headers = clear_session_cookie_headers()?;
    tracing::debug!("Session cookie cleared");
    Ok(headers)
}
