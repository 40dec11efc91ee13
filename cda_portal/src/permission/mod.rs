mod config;
mod errors;
mod resolver;
mod table;
mod types;

pub use errors::PermissionError;
pub use resolver::{has_permission, has_permission_in, permissions_for};
pub use table::PermissionTable;
pub use types::Permission;

/// The process-wide permission table
///
/// Returns `None` when the configured table failed to load. Callers then treat
/// every position as holding no permissions.
pub fn permission_table() -> Option<&'static PermissionTable> {
    config::PERMISSION_TABLE.as_ref().ok()
}

/// Load the permission table and report a configuration error early
pub(crate) fn init() -> Result<(), PermissionError> {
    match config::PERMISSION_TABLE.as_ref() {
        Ok(table) => {
            tracing::info!(
                positions = table.positions().count(),
                "Permission table loaded"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Permission table failed to load");
            Err(e.clone())
        }
    }
}
