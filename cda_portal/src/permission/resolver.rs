use crate::session::SessionUser;

use super::config::PERMISSION_TABLE;
use super::table::PermissionTable;
use super::types::Permission;

/// Decide whether the session may exercise `permission`
///
/// 1. no session: denied
/// 2. role `admin`: granted, whatever the position
/// 3. position (empty when absent) listed in the permission table with the
///    token: granted
/// 4. anything else: denied
///
/// When the permission table failed to load only step 2 can grant.
pub fn has_permission(session: Option<&SessionUser>, permission: Permission) -> bool {
    match PERMISSION_TABLE.as_ref() {
        Ok(table) => has_permission_in(table, session, permission),
        Err(_) => session.is_some_and(SessionUser::is_admin),
    }
}

/// [`has_permission`] against an explicit table
pub fn has_permission_in(
    table: &PermissionTable,
    session: Option<&SessionUser>,
    permission: Permission,
) -> bool {
    let Some(session) = session else {
        return false;
    };

    if session.is_admin() {
        return true;
    }

    let position = session.position.as_deref().unwrap_or("");
    table.position_grants(position, permission)
}

/// Every permission the session holds, in token order
pub fn permissions_for(session: Option<&SessionUser>) -> Vec<Permission> {
    Permission::ALL
        .into_iter()
        .filter(|permission| has_permission(session, *permission))
        .collect()
}
