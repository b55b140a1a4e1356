use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use std::sync::OnceLock;

use crate::error::{Error, Result};

pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Internal(format!("password hashing failed: {}", e)))
}

/// Returns `false` for a wrong password and for a stored hash that cannot be parsed.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hashed) else {
        tracing::warn!("stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Runs a full verification against a throwaway hash and always fails.
/// Used when the account does not exist so the response takes as long as a wrong password.
pub fn verify_against_dummy(plain: &str) -> bool {
    let dummy = DUMMY_HASH.get_or_init(|| {
        hash_password("jobboard-no-such-user")
            .map_err(|e| tracing::error!(error = %e, "could not build dummy password hash"))
            .ok()
    });
    if let Some(hash) = dummy {
        let _ = verify_password(plain, hash);
    }
    false
}
