use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};

use super::errors::PermissionError;
use super::types::Permission;

/// Permissions granted per organizational position
///
/// Built once at startup and never modified. Position keys are matched
/// exactly: no case folding, no trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTable {
    positions: HashMap<String, BTreeSet<Permission>>,
    admin: Vec<Permission>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PermissionTableFile {
    positions: HashMap<String, Vec<Permission>>,
}

impl Default for PermissionTable {
    fn default() -> Self {
        use Permission::*;

        let everything = Permission::ALL.to_vec();
        Self::from_entries([
            ("clavari d'honor", vec![]),
            ("President", everything.clone()),
            ("Vicepresident", vec![]),
            ("Secretari", everything),
            ("Tresorer", vec![ManagePositions, ManageExpenses]),
            ("Cobrador de multes", vec![ManagePositions]),
            ("xarxes", vec![ManageVotes, ManageDocuments]),
            ("lotero", vec![ManageVotes]),
        ])
    }
}

impl PermissionTable {
    /// Build a table from `(position, permissions)` pairs
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Permission>)>,
        S: Into<String>,
    {
        let positions = entries
            .into_iter()
            .map(|(position, permissions)| (position.into(), permissions.into_iter().collect()))
            .collect();

        Self {
            positions,
            admin: Permission::ALL.to_vec(),
        }
    }

    /// Parse a table from its JSON form
    ///
    /// ```json
    /// { "positions": { "Tresorer": ["cargos:manage", "gastos:manage"] } }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, PermissionError> {
        let file: PermissionTableFile =
            serde_json::from_str(json).map_err(|e| PermissionError::InvalidTable(e.to_string()))?;
        Ok(Self::from_entries(file.positions))
    }

    /// Permissions of a position, empty when the position is not in the table
    pub fn permissions_of(&self, position: &str) -> impl Iterator<Item = Permission> + '_ {
        self.positions
            .get(position)
            .into_iter()
            .flat_map(|permissions| permissions.iter().copied())
    }

    pub fn position_grants(&self, position: &str, permission: Permission) -> bool {
        self.positions
            .get(position)
            .is_some_and(|permissions| permissions.contains(&permission))
    }

    /// Whether `position` is a key of the table
    pub fn is_known_position(&self, position: &str) -> bool {
        self.positions.contains_key(position)
    }

    pub fn positions(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    /// Permissions held by the admin role
    pub fn admin_permissions(&self) -> &[Permission] {
        &self.admin
    }
}
