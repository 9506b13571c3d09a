//! Password hashing with bcrypt

/// Bcrypt work factor for stored credentials
pub const PASSWORD_HASH_COST: u32 = 10;

const BCRYPT_HASH_LENGTH: usize = 60;
const BCRYPT_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];

/// Hash a plaintext password for storage.
///
/// # Panics
///
/// Panics if the bcrypt primitive fails.
pub fn hash_password(password: &str) -> String {
    match bcrypt::hash(password, PASSWORD_HASH_COST) {
        Ok(hash) => hash,
        Err(e) => panic!("failed to hash password: {}", e),
    }
}

/// Check a plaintext password against a stored hash
pub fn compare_password(hash: &str, password: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Whether the value already has the shape of a bcrypt hash
pub fn is_password_hash(value: &str) -> bool {
    value.len() == BCRYPT_HASH_LENGTH && BCRYPT_PREFIXES.iter().any(|p| value.starts_with(p))
}
