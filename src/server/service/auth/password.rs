//! Password hashing on the blocking thread pool.

use crate::server::error::internal::InternalError;

/// Minimum accepted password length at signup.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes a password with bcrypt at the given cost.
///
/// # Returns
/// - `Ok(String)` - Bcrypt hash including salt
/// - `Err(InternalError::PasswordHash)` - Hashing failed or the blocking task panicked
pub async fn hash_password(password: &str, cost: u32) -> Result<String, InternalError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || {
        bcrypt::hash(password, cost).map_err(|e| InternalError::PasswordHash(e.to_string()))
    })
    .await
    .map_err(|e| InternalError::PasswordHash(format!("Task join error: {}", e)))?
}

/// Verifies a password against a stored bcrypt hash.
///
/// A malformed stored hash verifies as `false` rather than erroring so that login
/// failures look the same regardless of cause.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, InternalError> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
        .await
        .map_err(|e| InternalError::PasswordHash(format!("Task join error: {}", e)))
}
