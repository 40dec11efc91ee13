use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::PermissionError;

/// A management capability that can be granted to a position
///
/// The set is closed: a token string that is not listed here does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "cargos:manage")]
    ManagePositions,
    #[serde(rename = "gastos:manage")]
    ManageExpenses,
    #[serde(rename = "calendario:manage")]
    ManageCalendar,
    #[serde(rename = "normas:manage")]
    ManageRules,
    #[serde(rename = "votaciones:manage")]
    ManageVotes,
    #[serde(rename = "documentos:manage")]
    ManageDocuments,
    #[serde(rename = "config:manage")]
    ManageConfig,
}

impl Permission {
    /// Every permission token, in declaration order
    pub const ALL: [Permission; 7] = [
        Permission::ManagePositions,
        Permission::ManageExpenses,
        Permission::ManageCalendar,
        Permission::ManageRules,
        Permission::ManageVotes,
        Permission::ManageDocuments,
        Permission::ManageConfig,
    ];

    /// The token string, e.g. `"gastos:manage"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ManagePositions => "cargos:manage",
            Permission::ManageExpenses => "gastos:manage",
            Permission::ManageCalendar => "calendario:manage",
            Permission::ManageRules => "normas:manage",
            Permission::ManageVotes => "votaciones:manage",
            Permission::ManageDocuments => "documentos:manage",
            Permission::ManageConfig => "config:manage",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| PermissionError::UnknownToken(s.to_string()))
    }
}
