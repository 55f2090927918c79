//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`),
//! so parameters travel with each hash.

use std::fmt;

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHash as PhcString, SaltString},
};
use rand::{RngCore, rngs::OsRng};
use zeroize::Zeroize;

/// Number of random salt bytes per hash.
pub const SALT_BYTES: usize = 16;

/// A stored password hash. Never holds the plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for PasswordHash {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(**redacted**)")
    }
}

/// Hash a password with a fresh random salt.
///
/// # Errors
///
/// Returns an error if the salt cannot be encoded or hashing fails.
pub fn hash_password(password: &str) -> Result<PasswordHash, password_hash::Error> {
    let mut salt = [0_u8; SALT_BYTES];

    OsRng.fill_bytes(&mut salt);

    let salt_string = SaltString::encode_b64(&salt);

    salt.zeroize();

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt_string?)?
        .to_string();

    Ok(PasswordHash(hash))
}

/// Check a password against a stored hash. Unparseable hashes never match.
#[must_use]
pub fn verify_password(password: &str, stored: &PasswordHash) -> bool {
    PhcString::new(stored.as_str()).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}
