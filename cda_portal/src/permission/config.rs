use std::sync::LazyLock;

use super::errors::PermissionError;
use super::table::PermissionTable;

/// Optional path to a JSON file replacing the built-in permission table
static CDA_PERMISSION_TABLE_PATH: LazyLock<Option<String>> = LazyLock::new(|| {
    std::env::var("CDA_PERMISSION_TABLE_PATH")
        .ok()
        .filter(|path| !path.trim().is_empty())
});

pub(super) static PERMISSION_TABLE: LazyLock<Result<PermissionTable, PermissionError>> =
    LazyLock::new(|| load_permission_table(CDA_PERMISSION_TABLE_PATH.as_deref()));

fn load_permission_table(path: Option<&str>) -> Result<PermissionTable, PermissionError> {
    let Some(path) = path else {
        return Ok(PermissionTable::default());
    };

    tracing::info!(path = %path, "Loading permission table from file");
    let json = std::fs::read_to_string(path).map_err(|e| PermissionError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    PermissionTable::from_json(&json)
}
