use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::session::ROLE_MEMBER;

/// A registered member of the association
///
/// `position` is free text matched exactly against the permission table.
#[derive(Clone, FromRow, PartialEq)]
pub struct Member {
    /// Unique member identifier
    pub id: String,
    /// Contact email, unique across members
    pub email: String,
    /// Login handle, unique across members
    pub username: String,
    /// Full name shown in the portal
    pub display_name: String,
    /// `"admin"` or `"miembro"`
    pub role: String,
    /// Organizational position, if any
    pub position: Option<String>,
    /// Argon2id hash in PHC string format
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Member")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .field("position", &self.position)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl Member {
    /// Create an ordinary member with a fresh id
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        display_name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into(),
            username: username.into(),
            display_name: display_name.into(),
            role: ROLE_MEMBER.to_string(),
            position: None,
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }
}

/// Column a member can be looked up by
#[derive(Debug, Clone)]
pub enum MemberSearchField {
    Id(String),
    Username(String),
    Email(String),
}

impl std::fmt::Display for MemberSearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberSearchField::Id(id) => write!(f, "id={id}"),
            MemberSearchField::Username(username) => write!(f, "username={username}"),
            MemberSearchField::Email(email) => write!(f, "email={email}"),
        }
    }
}
