use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::{Rng, distributions::Alphanumeric, thread_rng};

use crate::error::AppError;

/// Stored hashes starting with this never verify.
pub const UNUSABLE_PASSWORD_PREFIX: &str = "!";
const UNUSABLE_PASSWORD_SUFFIX_LEN: usize = 40;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut thread_rng());
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AppError::internal(format!("password hashing failed: {err}")))?
        .to_string();
    Ok(hash)
}

/// `Ok(false)` for a wrong password or an unusable hash; `Err` only when the
/// stored value is not a hash at all.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    if !is_usable(hash) {
        return Ok(false);
    }

    let parsed = PasswordHash::new(hash)
        .map_err(|err| AppError::internal(format!("invalid password hash: {err}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// A stored value no password can match, for accounts created without one.
pub fn make_unusable_password() -> String {
    let suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UNUSABLE_PASSWORD_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{UNUSABLE_PASSWORD_PREFIX}{suffix}")
}

pub fn is_usable(hash: &str) -> bool {
    !hash.is_empty() && !hash.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::{hash_password, is_usable, make_unusable_password, verify_password};

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hash = hash_password("Password123").expect("hashing should succeed");

        assert_ne!(hash, "Password123");
        assert!(verify_password("Password123", &hash).expect("hash parses"));
        assert!(!verify_password("password123", &hash).expect("hash parses"));
    }

    #[test]
    fn short_passwords_are_hashed_too() {
        let hash = hash_password("test123").expect("hashing should succeed");
        assert!(verify_password("test123", &hash).expect("hash parses"));
    }

    #[test]
    fn unusable_password_never_verifies() {
        let marker = make_unusable_password();

        assert_eq!(marker.len(), 41);
        assert!(!is_usable(&marker));
        assert!(!verify_password("", &marker).expect("marker is not parsed"));
        assert!(!verify_password(&marker, &marker).expect("marker is not parsed"));
    }

    #[test]
    fn unusable_markers_differ() {
        assert_ne!(make_unusable_password(), make_unusable_password());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(verify_password("x", "not-a-hash").is_err());
    }
}
