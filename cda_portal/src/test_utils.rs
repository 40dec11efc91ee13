//! Shared test initialization
//!
//! Tests touching the member database call [`init_test_environment`] first and
//! run under `#[serial]`, since they share one SQLite file.

use std::sync::Once;

/// Load `.env_test` once, start from an empty database file and make sure the
/// members table exists.
pub(crate) async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        if let Some(db_path) = extract_sqlite_file_path() {
            // Missing file is fine
            let _ = std::fs::remove_file(&db_path);
        }
    });

    if let Err(e) = crate::memberdb::init().await {
        eprintln!("Warning: Failed to initialize MemberStore: {e}");
    }
}

/// File path of a `sqlite:` URL, `None` for in-memory or other stores
fn extract_sqlite_file_path() -> Option<String> {
    let url = std::env::var("GENERIC_DATA_STORE_URL").ok()?;
    sqlite_file_path(&url)
}

fn sqlite_file_path(url: &str) -> Option<String> {
    let path = url.strip_prefix("sqlite:")?;
    let path = path.split('?').next().unwrap_or(path);
    let path = path.trim_start_matches("//");

    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Some(path.to_string())
}

#[test]
fn test_sqlite_file_path() {
    assert_eq!(
        sqlite_file_path("sqlite:/tmp/cda_portal_test.db"),
        Some("/tmp/cda_portal_test.db".to_string())
    );
    assert_eq!(
        sqlite_file_path("sqlite:///tmp/cda.db?mode=rwc"),
        Some("/tmp/cda.db".to_string())
    );
    assert_eq!(sqlite_file_path("sqlite::memory:"), None);
    assert_eq!(sqlite_file_path("postgres://localhost/cda"), None);
}
