use serde::Serialize;

use crate::memberdb::MemberStore;
use crate::permission::permission_table;

use super::errors::CoordinationError;

/// A stored member whose position is not a key of the permission table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownPosition {
    pub username: String,
    pub position: String,
}

/// Report members whose position grants nothing because the permission table
/// does not know it, e.g. `"secretari"` instead of `"Secretari"`.
///
/// Members without a position are not reported.
#[tracing::instrument]
pub async fn audit_member_positions() -> Result<Vec<UnknownPosition>, CoordinationError> {
    let table = permission_table();
    let members = MemberStore::list_members().await?;

    let unknown: Vec<UnknownPosition> = members
        .into_iter()
        .filter_map(|member| {
            let position = member.position?;
            let known = table.is_some_and(|t| t.is_known_position(&position));
            (!known).then_some(UnknownPosition {
                username: member.username,
                position,
            })
        })
        .collect();

    for entry in &unknown {
        tracing::warn!(
            username = %entry.username,
            position = %entry.position,
            "Member position is not in the permission table"
        );
    }

    tracing::info!(unknown = unknown.len(), "Member position audit completed");
    Ok(unknown)
}
