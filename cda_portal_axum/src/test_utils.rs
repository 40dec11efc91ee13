//! Shared setup for tests that go through the member database

use std::sync::Once;

use cda_portal::{ROLE_ADMIN, SessionUser, seed_default_members_core};
use tokio::sync::OnceCell;

/// Load `.env_test`, start from an empty database file, initialize the core
/// and seed the default members. Runs once per test binary.
pub(crate) async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if let Err(e) = dotenvy::from_filename(".env_test") {
            eprintln!("Warning: .env_test not loaded: {e}");
        }

        if let Ok(url) = std::env::var("GENERIC_DATA_STORE_URL") {
            if let Some(path) = url.strip_prefix("sqlite:") {
                let _ = std::fs::remove_file(path.trim_start_matches("//"));
            }
        }
    });

    static CORE_INIT: OnceCell<()> = OnceCell::const_new();
    CORE_INIT
        .get_or_init(|| async {
            if let Err(e) = cda_portal::init().await {
                panic!("Failed to initialize cda_portal: {e}");
            }

            let mut admin = SessionUser::new("test-setup", "test-setup");
            admin.role = Some(ROLE_ADMIN.to_string());
            if let Err(e) = seed_default_members_core(Some(&admin)).await {
                panic!("Failed to seed default members: {e}");
            }
        })
        .await;
}
