use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use secrecy::{ExposeSecret, SecretString};

use super::errors::MemberError;

/// Hash verified against when the username does not exist, so that unknown
/// usernames cost the same as wrong passwords.
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$\
    CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

fn argon2_settings() -> Result<Argon2<'static>, MemberError> {
    let params = Params::new(15000, 2, 1, None)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn compute_password_hash(password: &SecretString) -> Result<String, MemberError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2_settings()?
        .hash_password(password.expose_secret().as_bytes(), &salt)?
        .to_string();
    Ok(hash)
}

fn verify_password_hash(expected_hash: &str, candidate: &SecretString) -> bool {
    let Ok(expected_hash) = PasswordHash::new(expected_hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(candidate.expose_secret().as_bytes(), &expected_hash)
        .is_ok()
}

/// Hash a password with Argon2id on the blocking pool
pub(crate) async fn hash_password(password: SecretString) -> Result<String, MemberError> {
    tokio::task::spawn_blocking(move || compute_password_hash(&password))
        .await
        .map_err(|e| MemberError::Password(format!("Hashing task failed: {e}")))?
}

/// Check a candidate password against a stored hash on the blocking pool
pub(crate) async fn verify_password(
    expected_hash: String,
    candidate: SecretString,
) -> Result<bool, MemberError> {
    tokio::task::spawn_blocking(move || verify_password_hash(&expected_hash, &candidate))
        .await
        .map_err(|e| MemberError::Password(format!("Verification task failed: {e}")))
}

/// Like [`verify_password`], but verifies against a dummy hash when there is
/// no stored hash. Always `false` in that case.
#[tracing::instrument(name = "Verify password", skip_all)]
pub(crate) async fn verify_password_or_dummy(
    expected_hash: Option<String>,
    candidate: SecretString,
) -> Result<bool, MemberError> {
    match expected_hash {
        Some(hash) => verify_password(hash, candidate).await,
        None => {
            verify_password(DUMMY_PASSWORD_HASH.to_string(), candidate).await?;
            Ok(false)
        }
    }
}
