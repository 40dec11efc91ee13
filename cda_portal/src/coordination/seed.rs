use secrecy::SecretString;
use serde::Serialize;

use crate::config::{CDA_DEFAULT_ADMIN_PASSWORD, CDA_DEFAULT_MEMBER_PASSWORD};
use crate::memberdb::{Member, MemberStore, hash_password};
use crate::permission::{Permission, has_permission};
use crate::session::{ROLE_ADMIN, ROLE_MEMBER, SessionUser};

use super::errors::CoordinationError;

/// A member written by [`seed_default_members_core`], without credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeededMember {
    pub username: String,
    pub email: String,
    pub role: String,
    pub position: Option<String>,
}

struct DefaultMember {
    email: &'static str,
    username: &'static str,
    display_name: &'static str,
    role: &'static str,
    position: &'static str,
}

const DEFAULT_MEMBERS: [DefaultMember; 2] = [
    DefaultMember {
        email: "admin@cda2026.local",
        username: "admin",
        display_name: "Administrador CDA 2026",
        role: ROLE_ADMIN,
        position: "President",
    },
    DefaultMember {
        email: "miembro@cda2026.local",
        username: "miembro",
        display_name: "Miembro Test",
        role: ROLE_MEMBER,
        position: "clavari d'honor",
    },
];

/// Write the default `admin` and `miembro` members
///
/// Allowed while the member table is empty, afterwards only for callers
/// holding `config:manage`. Existing rows with the same email are updated.
#[tracing::instrument(skip(caller), fields(caller = caller.map(|c| c.username.as_str())))]
pub async fn seed_default_members_core(
    caller: Option<&SessionUser>,
) -> Result<Vec<SeededMember>, CoordinationError> {
    let existing = MemberStore::count_members().await?;
    if existing > 0 && !has_permission(caller, Permission::ManageConfig) {
        return Err(CoordinationError::Unauthorized.log());
    }

    let mut seeded = Vec::with_capacity(DEFAULT_MEMBERS.len());
    for default in &DEFAULT_MEMBERS {
        let password = if default.role == ROLE_ADMIN {
            CDA_DEFAULT_ADMIN_PASSWORD.as_str()
        } else {
            CDA_DEFAULT_MEMBER_PASSWORD.as_str()
        };
        let hash = hash_password(SecretString::from(password)).await?;

        let member = Member::new(
            default.email,
            default.username,
            default.display_name,
            hash,
        )
        .with_role(default.role)
        .with_position(default.position);

        let stored = MemberStore::upsert_member(member).await?;
        seeded.push(SeededMember {
            username: stored.username,
            email: stored.email,
            role: stored.role,
            position: stored.position,
        });
    }

    tracing::info!(count = seeded.len(), existing, "Default members seeded");
    Ok(seeded)
}
