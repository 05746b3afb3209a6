//! Core business logic for the authentication system.

use crate::api::common::validation_errors_to_service_error;
use crate::auth::models::{AuthUser, LoginRequest, RegisterRequest};
use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use sqlx::SqlitePool;
use validator::Validate;

/// Authentication service combining the credential store, password hasher,
/// and token issuer.
///
/// The JWT utilities are built from the injected configuration, so every
/// signing and verification path uses the one configured secret.
pub struct AuthService<'a> {
    user_service: UserService<'a>,
    jwt_utils: JwtUtils,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, config: &Config) -> Self {
        AuthService {
            user_service: UserService::new(pool),
            jwt_utils: JwtUtils::from_config(config),
        }
    }

    /// Register a new account. The created identity is not returned to the
    /// caller.
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<()> {
        self.user_service.register_user(request).await?;
        Ok(())
    }

    /// Authenticate credentials and issue a session token.
    ///
    /// Returns the signed token together with the sanitized user record to
    /// embed in the response body.
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<(String, AuthUser)> {
        if let Err(validation_errors) = request.validate() {
            return Err(validation_errors_to_service_error(validation_errors));
        }

        let user = self
            .user_service
            .authenticate_user(&request.email, &request.password)
            .await?;

        let token = self.jwt_utils.generate_token(&user)?;

        Ok((token, AuthUser::from(user)))
    }

    /// Verify a session token and re-fetch the account behind it.
    ///
    /// The database round-trip guards against tokens that outlive their
    /// account. Expired, tampered, and orphaned tokens all collapse into the
    /// same generic unauthorized error.
    pub async fn check_auth(&self, token: &str) -> ServiceResult<AuthUser> {
        let claims = self.jwt_utils.validate_token(token)?;

        let user = self
            .user_service
            .get_user_required(&claims.sub)
            .await
            .map_err(|_| ServiceError::unauthorized("Invalid authentication token"))?;

        Ok(AuthUser::from(user))
    }
}
