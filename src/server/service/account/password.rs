//! Password hashing with bcrypt.

use std::sync::OnceLock;

#[cfg(not(test))]
const HASH_COST: u32 = bcrypt::DEFAULT_COST;
#[cfg(test)]
const HASH_COST: u32 = 4; // bcrypt's minimum cost (`bcrypt::MIN_COST` is private)

/// bcrypt only reads this many bytes of input; anything after them is ignored.
pub const PASSWORD_MAX_BYTES: usize = 72;

/// Hashes a plaintext password with a random salt.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// Checks a plaintext password against a stored bcrypt hash.
///
/// Passwords longer than `PASSWORD_MAX_BYTES` can never have been stored and never match, even
/// when their first 72 bytes equal the stored password.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    if password.len() > PASSWORD_MAX_BYTES {
        return Ok(false);
    }

    bcrypt::verify(password, password_hash)
}

/// Spends the cost of one verification when the username does not exist, so unknown
/// usernames and wrong passwords take comparable time.
pub fn verify_against_dummy(password: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let dummy = DUMMY_HASH.get_or_init(|| hash_password("accord-dummy-password").ok());
    if let Some(hash) = dummy {
        let _ = verify_password(password, hash);
    }
}
