mod data_store;
mod errors;

pub(crate) use data_store::{DB_TABLE_PREFIX, GENERIC_DATA_STORE};
pub(crate) use errors::StorageError;

/// Connect the data store and check that it answers
pub(crate) async fn init() -> Result<(), StorageError> {
    let store = GENERIC_DATA_STORE.lock().await;

    if let Some(pool) = store.as_sqlite() {
        sqlx::query("SELECT 1")
            .execute(pool)
            .await
            .map_err(|e| StorageError::Storage(e.to_string()))?;
    } else if let Some(pool) = store.as_postgres() {
        sqlx::query("SELECT 1")
            .execute(pool)
            .await
            .map_err(|e| StorageError::Storage(e.to_string()))?;
    } else {
        return Err(StorageError::Storage("Unsupported database type".to_string()));
    }

    tracing::debug!("Data store is reachable");
    Ok(())
}
