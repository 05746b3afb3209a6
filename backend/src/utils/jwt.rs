//! JWT token utilities for authentication and authorization.
//!
//! Provides secure token creation, validation, and claims management for
//! cookie-carried user sessions.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::database::models::User;
use crate::errors::ServiceError;

/// JWT Claims structure containing the authenticated user's identity
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// User email
    pub email: String,
    /// User role
    pub role: String,
    /// Display name
    pub user_name: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }

    /// Check if user has specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// Check if user is admin
    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }
}

/// JWT token utility for creating and validating tokens.
///
/// Both keys are derived from the single configured secret; every signing and
/// verification path in the application goes through this type.
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds: config.jwt_expires_in_seconds,
        }
    }

    /// Generate a new session token for an authenticated user
    pub fn generate_token(&self, user: &User) -> Result<String, ServiceError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_seconds as i64);

        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            user_name: user.user_name.clone(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a session token
    pub fn validate_token(&self, token: &str) -> Result<Claims, ServiceError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| ServiceError::unauthorized("Invalid authentication token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppEnv;
    use crate::database::models::UserRole;

    fn test_config(secret: &str, expires_in_seconds: u64) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 3,
            jwt_secret: secret.to_string(),
            jwt_expires_in_seconds: expires_in_seconds,
            server_port: 0,
            app_env: AppEnv::Development,
        }
    }

    fn test_user() -> User {
        User {
            id: "u-1".to_string(),
            user_name: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn token_roundtrip_preserves_identity() {
        let jwt = JwtUtils::from_config(&test_config("secret", 3600));
        let token = jwt.generate_token(&test_user()).unwrap();

        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.user_name, "alice");
        assert!(!claims.is_admin());
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = JwtUtils::from_config(&test_config("secret", 3600));

        let now = Utc::now();
        let stale = Claims {
            sub: "u-1".to_string(),
            email: "a@x.com".to_string(),
            role: "user".to_string(),
            user_name: "alice".to_string(),
            exp: (now - Duration::hours(1)).timestamp() as usize,
            iat: (now - Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &stale,
            &EncodingKey::from_secret("secret".as_bytes()),
        )
        .unwrap();

        assert!(jwt.validate_token(&token).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtUtils::from_config(&test_config("secret-a", 3600));
        let verifier = JwtUtils::from_config(&test_config("secret-b", 3600));

        let token = issuer.generate_token(&test_user()).unwrap();
        assert!(verifier.validate_token(&token).is_err());
    }

    #[test]
    fn malformed_token_is_rejected() {
        let jwt = JwtUtils::from_config(&test_config("secret", 3600));
        assert!(jwt.validate_token("not-a-token").is_err());
        assert!(jwt.validate_token("").is_err());
    }
}
