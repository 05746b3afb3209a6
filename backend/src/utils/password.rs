//! Password hashing helpers.
//!
//! Credentials are stored as adaptive bcrypt hashes; the default cost of 12
//! rounds keeps offline brute force expensive. Hashing runs on the blocking
//! thread pool so in-flight requests are not stalled behind it.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{DEFAULT_COST, hash, verify};

/// Hash a plaintext password before storing it.
pub async fn hash_password(password: &str) -> ServiceResult<String> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|e| ServiceError::internal_error(format!("Hashing task failed: {}", e)))?
        .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
}

/// Verify a plaintext password against the stored hash.
pub async fn verify_password(password: &str, password_hash: &str) -> ServiceResult<bool> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();

    tokio::task::spawn_blocking(move || verify(password, &password_hash))
        .await
        .map_err(|e| ServiceError::internal_error(format!("Verification task failed: {}", e)))?
        .map_err(|e| ServiceError::internal_error(format!("Password verification failed: {}", e)))
}
