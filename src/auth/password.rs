use sha2::{Digest, Sha256};

/// Only this many leading characters of the configured salt are used
pub const SALT_LENGTH: usize = 64;

/// Upper-case hex SHA-256 of the salt prefix followed by the password
pub fn hash_password(password: &str, salt: &str) -> String {
    let salt: String = salt.chars().take(SALT_LENGTH).collect();

    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:X}", hasher.finalize())
}

pub fn verify_password(password: &str, stored_hash: &str, salt: &str) -> bool {
    let computed = hash_password(password, salt);
    constant_time_eq(computed.as_bytes(), stored_hash.trim().to_ascii_uppercase().as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
