//! Salted password hashing for stored credentials.
//!
//! Credentials are stored as a random per-record salt and the SHA-256 digest
//! of salt || password, both hex-encoded. Plaintext passwords never touch
//! the database.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Generates a fresh random 16-byte salt, hex-encoded.
pub fn generate_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Computes the hex-encoded SHA-256 digest of salt || password.
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Checks a password attempt against a stored salt and hash.
///
/// The comparison is exact: case or whitespace differences in the password
/// produce a different digest and fail verification.
pub fn verify_password(salt: &str, stored_hash: &str, attempt: &str) -> bool {
    hash_password(salt, attempt) == stored_hash
}
