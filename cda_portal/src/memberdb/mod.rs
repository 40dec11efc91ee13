mod errors;
mod password;
mod store;
mod types;

pub use errors::MemberError;
pub(crate) use password::{hash_password, verify_password_or_dummy};
pub(crate) use store::MemberStore;
pub use types::{Member, MemberSearchField};

pub(crate) async fn init() -> Result<(), MemberError> {
    MemberStore::init().await
}
