use crate::memberdb::{
    errors::MemberError,
    types::{Member, MemberSearchField},
};
use crate::storage::GENERIC_DATA_STORE;

use super::postgres::*;
use super::sqlite::*;

pub(crate) struct MemberStore;

impl MemberStore {
    /// Create the members table if it does not exist yet
    pub(crate) async fn init() -> Result<(), MemberError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => create_tables_sqlite(pool).await,
            (_, Some(pool)) => create_tables_postgres(pool).await,
            _ => Err(MemberError::Storage("Unsupported database type".to_string())),
        }
    }

    #[tracing::instrument(fields(member_field = %field))]
    pub(crate) async fn get_member_by(field: MemberSearchField) -> Result<Option<Member>, MemberError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            get_member_by_field_sqlite(pool, &field).await
        } else if let Some(pool) = store.as_postgres() {
            get_member_by_field_postgres(pool, &field).await
        } else {
            Err(MemberError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(found) => tracing::debug!(found = found.is_some(), "Member lookup completed"),
            Err(e) => tracing::error!(error = %e, "Member lookup failed"),
        }

        result
    }

    /// All members ordered by username
    pub(crate) async fn list_members() -> Result<Vec<Member>, MemberError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            list_members_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            list_members_postgres(pool).await
        } else {
            Err(MemberError::Storage("Unsupported database type".to_string()))
        }
    }

    pub(crate) async fn count_members() -> Result<i64, MemberError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            count_members_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            count_members_postgres(pool).await
        } else {
            Err(MemberError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Insert a member, or update the one with the same email
    #[tracing::instrument(skip(member), fields(member_email = %member.email))]
    pub(crate) async fn upsert_member(member: Member) -> Result<Member, MemberError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            upsert_member_sqlite(pool, member).await
        } else if let Some(pool) = store.as_postgres() {
            upsert_member_postgres(pool, member).await
        } else {
            Err(MemberError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(member) => tracing::info!(
                member_id = %member.id,
                username = %member.username,
                role = %member.role,
                "Member upsert completed"
            ),
            Err(e) => tracing::error!(error = %e, "Member upsert failed"),
        }

        result
    }

    #[tracing::instrument]
    pub(crate) async fn delete_member(id: &str) -> Result<(), MemberError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            delete_member_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_member_postgres(pool, id).await
        } else {
            Err(MemberError::Storage("Unsupported database type".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ROLE_ADMIN;
    use crate::test_utils::init_test_environment;
    use serial_test::serial;

    fn unique_member(tag: &str) -> Member {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Member::new(
            format!("{tag}-{suffix}@cda2026.local"),
            format!("{tag}-{suffix}"),
            format!("Test {tag}"),
            "$argon2id$placeholder",
        )
    }

    #[tokio::test]
    #[serial]
    async fn test_upsert_and_lookup_by_every_field() {
        init_test_environment().await;

        let member = unique_member("lookup").with_position("Tresorer");
        let stored = MemberStore::upsert_member(member.clone())
            .await
            .expect("Failed to upsert member");
        assert_eq!(stored.id, member.id);
        assert_eq!(stored.position.as_deref(), Some("Tresorer"));

        for field in [
            MemberSearchField::Id(member.id.clone()),
            MemberSearchField::Username(member.username.clone()),
            MemberSearchField::Email(member.email.clone()),
        ] {
            let found = MemberStore::get_member_by(field)
                .await
                .expect("Lookup failed")
                .expect("Member should exist");
            assert_eq!(found.id, member.id);
            assert_eq!(found.password_hash, member.password_hash);
        }

        MemberStore::delete_member(&member.id).await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_lookup_missing_member_is_none() {
        init_test_environment().await;

        let found = MemberStore::get_member_by(MemberSearchField::Username(
            "nobody-with-this-name".to_string(),
        ))
        .await
        .expect("Lookup should succeed");
        assert!(found.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_upsert_same_email_updates_in_place() {
        init_test_environment().await;

        let original = MemberStore::upsert_member(unique_member("update"))
            .await
            .unwrap();

        let mut changed = Member::new(
            original.email.clone(),
            original.username.clone(),
            "Renamed",
            "$argon2id$other",
        )
        .with_role(ROLE_ADMIN);
        changed.position = Some("Secretari".to_string());

        let stored = MemberStore::upsert_member(changed).await.unwrap();
        assert_eq!(stored.id, original.id, "id of the existing row is kept");
        assert_eq!(stored.display_name, "Renamed");
        assert_eq!(stored.role, ROLE_ADMIN);
        assert_eq!(stored.position.as_deref(), Some("Secretari"));
        assert_eq!(stored.password_hash, "$argon2id$other");

        MemberStore::delete_member(&original.id).await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_count_and_list() {
        init_test_environment().await;

        let before = MemberStore::count_members().await.unwrap();
        let a = MemberStore::upsert_member(unique_member("zz-list")).await.unwrap();
        let b = MemberStore::upsert_member(unique_member("aa-list")).await.unwrap();

        assert_eq!(MemberStore::count_members().await.unwrap(), before + 2);

        let members = MemberStore::list_members().await.unwrap();
        let usernames: Vec<&str> = members.iter().map(|m| m.username.as_str()).collect();
        let mut sorted = usernames.clone();
        sorted.sort();
        assert_eq!(usernames, sorted);
        assert!(usernames.contains(&a.username.as_str()));
        assert!(usernames.contains(&b.username.as_str()));

        MemberStore::delete_member(&a.id).await.unwrap();
        MemberStore::delete_member(&b.id).await.unwrap();
        assert_eq!(MemberStore::count_members().await.unwrap(), before);
    }

    #[tokio::test]
    #[serial]
    async fn test_duplicate_username_is_rejected() {
        init_test_environment().await;

        let first = MemberStore::upsert_member(unique_member("dup")).await.unwrap();
        let clash = Member::new(
            "another-address@cda2026.local",
            first.username.clone(),
            "Clash",
            "$argon2id$placeholder",
        );

        let result = MemberStore::upsert_member(clash).await;
        assert!(matches!(result, Err(MemberError::Storage(_))));

        MemberStore::delete_member(&first.id).await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_missing_member() {
        init_test_environment().await;

        let result = MemberStore::delete_member("no-such-member-id").await;
        assert!(matches!(result, Err(MemberError::NotFound)));
    }
}
