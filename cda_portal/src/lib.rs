//! cda_portal - Session and authorization core for the CDA 2026 association portal
//!
//! This crate holds the parts of the portal that decide who a request belongs to
//! and what that member may manage:
//!
//! - the session codec, which turns a [`SessionUser`] into the value of the
//!   `simple_session` cookie and back,
//! - the permission resolver, which answers [`has_permission`] from the member's
//!   role and position,
//! - the route guard decision, which tells the web layer whether to redirect a
//!   request before any page logic runs,
//! - the member store and the login/logout coordination that produce sessions.

mod config;
mod coordination;
mod guard;
mod memberdb;
mod permission;
mod session;
mod storage;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::{CDA_LANDING_PATH, CDA_LOGIN_PATH};

pub use coordination::{
    CoordinationError, SeededMember, UnknownPosition, audit_member_positions, login_core,
    logout_core, seed_default_members_core,
};

pub use guard::{GuardDecision, PROTECTED_PATH_PREFIXES, evaluate_route, is_protected_path};

pub use memberdb::{Member, MemberError};

pub use permission::{
    Permission, PermissionError, PermissionTable, has_permission, has_permission_in,
    permission_table, permissions_for,
};

pub use session::{
    RawCookieHeaderSource, ROLE_ADMIN, ROLE_MEMBER, SESSION_COOKIE_NAME, SessionError,
    SessionSource, SessionUser, TypedCookieSource, clear_session_cookie_headers, decode_session,
    encode_session, extract_cookie_value, resolve_current_session, resolve_with_sources,
    session_cookie_headers, session_from_cookie_header,
};

/// Initialize the portal core
///
/// Loads the permission table, connects the member store, creates the member
/// table when missing and reports members whose position is not a key of the
/// permission table.
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    permission::init()?;
    storage::init().await?;
    memberdb::init().await?;
    coordination::audit_member_positions().await?;
    Ok(())
}
