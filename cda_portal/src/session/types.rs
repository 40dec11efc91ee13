use serde::{Deserialize, Serialize};

use crate::memberdb::Member;

/// Role value that grants every permission
pub const ROLE_ADMIN: &str = "admin";

/// Role value of an ordinary member
pub const ROLE_MEMBER: &str = "miembro";

/// The decoded session of an authenticated member
///
/// This is exactly what travels inside the session cookie. Unknown keys are
/// rejected when decoding so that a payload of a different shape never turns
/// into a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionUser {
    /// Unique member identifier
    pub id: String,
    /// Login handle
    pub username: String,
    /// Full name shown in the portal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Coarse access tier, `"admin"` or `"miembro"` in practice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Organizational position, the key into the permission table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl SessionUser {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            display_name: None,
            role: None,
            position: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ROLE_ADMIN)
    }

    /// A session must carry both an id and a username
    pub(crate) fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.username.is_empty()
    }
}

impl From<Member> for SessionUser {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            username: member.username,
            display_name: Some(member.display_name),
            role: Some(member.role),
            position: member.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_is_admin_only_for_admin_role() {
        let mut user = SessionUser::new("u1", "anna");
        assert!(!user.is_admin());

        user.role = Some(ROLE_MEMBER.to_string());
        assert!(!user.is_admin());

        user.role = Some("Admin".to_string());
        assert!(!user.is_admin(), "role comparison is exact");

        user.role = Some(ROLE_ADMIN.to_string());
        assert!(user.is_admin());
    }

    #[test]
    fn test_is_complete() {
        assert!(SessionUser::new("u1", "anna").is_complete());
        assert!(!SessionUser::new("", "anna").is_complete());
        assert!(!SessionUser::new("u1", "").is_complete());
    }

    #[test]
    fn test_from_member() {
        let now = Utc::now();
        let member = Member {
            id: "m-1".to_string(),
            email: "tresorer@cda2026.local".to_string(),
            username: "jordi".to_string(),
            display_name: "Jordi Ferrer".to_string(),
            role: ROLE_MEMBER.to_string(),
            position: Some("Tresorer".to_string()),
            password_hash: "hash".to_string(),
            created_at: now,
            updated_at: now,
        };

        let user = SessionUser::from(member);

        assert_eq!(user.id, "m-1");
        assert_eq!(user.username, "jordi");
        assert_eq!(user.display_name.as_deref(), Some("Jordi Ferrer"));
        assert_eq!(user.role.as_deref(), Some(ROLE_MEMBER));
        assert_eq!(user.position.as_deref(), Some("Tresorer"));
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let user = SessionUser::new("u1", "anna");
        let json = serde_json::to_string(&user).expect("Failed to serialize SessionUser");
        assert_eq!(json, r#"{"id":"u1","username":"anna"}"#);
    }
}
