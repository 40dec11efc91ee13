//! Operations combining members, sessions and permissions
//!
//! - `login`: password login and logout
//! - `seed`: default member creation
//! - `audit`: startup check of member positions against the permission table

mod audit;
mod errors;
mod login;
mod seed;

pub use audit::{UnknownPosition, audit_member_positions};
pub use errors::CoordinationError;
pub use login::{login_core, logout_core};
pub use seed::{SeededMember, seed_default_members_core};
