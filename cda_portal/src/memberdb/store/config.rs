use std::{env, sync::LazyLock};

use crate::storage::DB_TABLE_PREFIX;

/// Members table name
pub(super) static DB_TABLE_MEMBERS: LazyLock<String> = LazyLock::new(|| {
    members_table_name(env::var("DB_TABLE_MEMBERS").ok().as_deref(), &DB_TABLE_PREFIX)
});

fn members_table_name(env_value: Option<&str>, prefix: &str) -> String {
    match env_value {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{prefix}members"),
    }
}
