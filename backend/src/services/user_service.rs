//! User business logic service.
//!
//! Handles registration and credential verification for shopper accounts.

use crate::api::common::validation_errors_to_service_error;
use crate::auth::models::RegisterRequest;
use crate::database::models::{CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::is_unique_violation;
use crate::repositories::user_repository::UserRepository;
use crate::utils::password::{hash_password, verify_password};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Registers a new user account.
    ///
    /// The password is hashed before it reaches the repository; the plaintext
    /// is never stored or logged. Duplicate emails are detected from the
    /// storage layer's unique constraint, so concurrent registrations with
    /// the same email cannot both succeed.
    ///
    /// # Errors
    /// Returns `ServiceError::AlreadyExists` for a duplicate email,
    /// `ServiceError::Validation` for bad input.
    pub async fn register_user(&self, request: RegisterRequest) -> ServiceResult<User> {
        if let Err(validation_errors) = request.validate() {
            return Err(validation_errors_to_service_error(validation_errors));
        }

        let password_hash = hash_password(&request.password).await?;

        let data = CreateUser {
            id: Uuid::now_v7().to_string(),
            user_name: request.user_name,
            email: request.email,
            password_hash,
        };

        let repo = UserRepository::new(self.pool);
        match repo.create_user(data).await {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation(&e) => {
                Err(ServiceError::already_exists("User", "this email"))
            }
            Err(e) => Err(ServiceError::Database { source: e }),
        }
    }

    /// Verifies a user's credentials for login.
    ///
    /// A missing account and a wrong password produce the same generic
    /// failure so the login path does not reveal whether an email is
    /// registered.
    pub async fn authenticate_user(&self, email: &str, password: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        let user = repo
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::unauthorized("Invalid credentials!"))?;

        if !verify_password(password, &user.password_hash).await? {
            return Err(ServiceError::unauthorized("Invalid credentials!"));
        }

        Ok(user)
    }

    /// Retrieves a user by ID with existence verification.
    pub async fn get_user_required(&self, id: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        repo.get_user_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            user_name: "alice".to_string(),
            email: email.to_string(),
            password: "pw123".to_string(),
        }
    }

    #[tokio::test]
    async fn register_hashes_password_and_defaults_role() {
        let pool = test_pool().await;
        let service = UserService::new(&pool);

        let user = service
            .register_user(register_request("a@x.com"))
            .await
            .unwrap();

        assert_ne!(user.password_hash, "pw123");
        assert_eq!(user.role.as_str(), "user");
        assert!(verify_password("pw123", &user.password_hash).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict_with_a_single_row() {
        let pool = test_pool().await;
        let service = UserService::new(&pool);

        service
            .register_user(register_request("a@x.com"))
            .await
            .unwrap();
        let err = service
            .register_user(register_request("a@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists { .. }));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("a@x.com")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn authenticate_rejects_unknown_email_and_wrong_password_alike() {
        let pool = test_pool().await;
        let service = UserService::new(&pool);
        service
            .register_user(register_request("a@x.com"))
            .await
            .unwrap();

        let missing = service
            .authenticate_user("b@x.com", "pw123")
            .await
            .unwrap_err();
        let wrong = service
            .authenticate_user("a@x.com", "nope")
            .await
            .unwrap_err();

        // Both paths collapse to the same generic unauthorized error.
        assert_eq!(missing.to_string(), wrong.to_string());

        let user = service.authenticate_user("a@x.com", "pw123").await.unwrap();
        assert_eq!(user.email, "a@x.com");
    }

    #[tokio::test]
    async fn invalid_email_fails_validation() {
        let pool = test_pool().await;
        let service = UserService::new(&pool);

        let err = service
            .register_user(register_request("not-an-email"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }
}
