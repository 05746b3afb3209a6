//! Database repositories, one per persisted entity.
//!
//! Repositories own all SQL; services never touch the pool directly.

use anyhow::Error;

pub mod address_repository;
pub mod cart_repository;
pub mod feature_repository;
pub mod order_repository;
pub mod product_repository;
pub mod review_repository;
pub mod user_repository;

/// Whether a repository error is a storage-layer unique-constraint violation.
///
/// Uniqueness conflicts (duplicate email, duplicate review) are enforced by
/// the database and surfaced to services through this check rather than a
/// separate existence query.
pub fn is_unique_violation(error: &Error) -> bool {
    error
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
