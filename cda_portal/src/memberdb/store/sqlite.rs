use sqlx::{Pool, Sqlite};

use crate::memberdb::{
    errors::MemberError,
    types::{Member, MemberSearchField},
};

use super::config::DB_TABLE_MEMBERS;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), MemberError> {
    let table_name = DB_TABLE_MEMBERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT NOT NULL UNIQUE,
            username TEXT NOT NULL UNIQUE,
            display_name TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'miembro',
            position TEXT,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn get_member_by_field_sqlite(
    pool: &Pool<Sqlite>,
    field: &MemberSearchField,
) -> Result<Option<Member>, MemberError> {
    let table_name = DB_TABLE_MEMBERS.as_str();

    let (column, value) = match field {
        MemberSearchField::Id(id) => ("id", id),
        MemberSearchField::Username(username) => ("username", username),
        MemberSearchField::Email(email) => ("email", email),
    };

    let member = sqlx::query_as::<_, Member>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE {column} = ?
        "#
    ))
    .bind(value)
    .fetch_optional(pool)
    .await?;

    Ok(member)
}

pub(super) async fn list_members_sqlite(pool: &Pool<Sqlite>) -> Result<Vec<Member>, MemberError> {
    let table_name = DB_TABLE_MEMBERS.as_str();

    let members = sqlx::query_as::<_, Member>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY username ASC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(members)
}

pub(super) async fn count_members_sqlite(pool: &Pool<Sqlite>) -> Result<i64, MemberError> {
    let table_name = DB_TABLE_MEMBERS.as_str();

    let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table_name}"))
        .fetch_one(pool)
        .await?;

    Ok(count)
}

pub(super) async fn upsert_member_sqlite(
    pool: &Pool<Sqlite>,
    member: Member,
) -> Result<Member, MemberError> {
    let table_name = DB_TABLE_MEMBERS.as_str();
    let now = chrono::Utc::now();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name}
            (id, email, username, display_name, role, position, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT (email) DO UPDATE SET
            username = excluded.username,
            display_name = excluded.display_name,
            role = excluded.role,
            position = excluded.position,
            password_hash = excluded.password_hash,
            updated_at = excluded.updated_at
        "#
    ))
    .bind(&member.id)
    .bind(&member.email)
    .bind(&member.username)
    .bind(&member.display_name)
    .bind(&member.role)
    .bind(&member.position)
    .bind(&member.password_hash)
    .bind(member.created_at)
    .bind(now)
    .execute(pool)
    .await?;

    // The stored id may differ from `member.id` when the email already existed
    sqlx::query_as::<_, Member>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE email = ?
        "#
    ))
    .bind(&member.email)
    .fetch_one(pool)
    .await
    .map_err(MemberError::from)
}

pub(super) async fn delete_member_sqlite(pool: &Pool<Sqlite>, id: &str) -> Result<(), MemberError> {
    let table_name = DB_TABLE_MEMBERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(MemberError::NotFound);
    }

    Ok(())
}
