//! Middleware for protecting authenticated routes and handling authorization.
//!
//! This module contains logic for validating session tokens and enforcing
//! user permissions across the API endpoints. Verification always uses the
//! secret from the application configuration carried in the request
//! extensions; there is no second source of cryptographic material.

use crate::config::Config;
use crate::utils::cookies::extract_session_token;
use crate::utils::jwt::JwtUtils;
use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};

/// Session authentication middleware.
///
/// Extracts the token cookie, verifies it, and attaches the decoded claims
/// to the request extensions for downstream handlers. Missing, malformed,
/// expired, and mis-signed tokens are all rejected with the same status.
pub async fn jwt_auth(mut request: Request, next: Next) -> Result<Response, StatusCode> {
    let token = extract_session_token(request.headers()).ok_or(StatusCode::UNAUTHORIZED)?;

    let config = request
        .extensions()
        .get::<Config>()
        .cloned()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    let jwt_utils = JwtUtils::from_config(&config);

    match jwt_utils.validate_token(&token) {
        Ok(claims) => {
            // Add claims to request extensions for use in handlers
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => Err(StatusCode::UNAUTHORIZED),
    }
}

/// Admin role authorization middleware.
///
/// Must run after `jwt_auth`, which inserts the claims it reads.
pub async fn admin_auth(request: Request, next: Next) -> Result<Response, StatusCode> {
    let claims = request
        .extensions()
        .get::<crate::utils::jwt::Claims>()
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if !claims.is_admin() {
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppEnv;
    use crate::database::models::{User, UserRole};
    use crate::utils::jwt::Claims;
    use axum::{Extension, Router, body::Body, http::Request as HttpRequest, middleware, routing::get};
    use chrono::Utc;
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 3,
            jwt_secret: "test-secret".to_string(),
            jwt_expires_in_seconds: 3600,
            server_port: 0,
            app_env: AppEnv::Development,
        }
    }

    fn token_for(role: UserRole, config: &Config) -> String {
        let user = User {
            id: "u-1".to_string(),
            user_name: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        JwtUtils::from_config(config).generate_token(&user).unwrap()
    }

    async fn whoami(Extension(claims): Extension<Claims>) -> String {
        claims.email
    }

    fn app(config: Config) -> Router {
        Router::new()
            .route("/protected", get(whoami).layer(middleware::from_fn(jwt_auth)))
            .route(
                "/admin",
                get(whoami)
                    .layer(middleware::from_fn(admin_auth))
                    .layer(middleware::from_fn(jwt_auth)),
            )
            .layer(Extension(config))
    }

    fn request(path: &str, cookie: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_cookie_is_rejected() {
        let response = app(test_config())
            .oneshot(request("/protected", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_token_is_rejected() {
        let response = app(test_config())
            .oneshot(request("/protected", Some("token=garbage")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_signed_elsewhere_is_rejected() {
        let config = test_config();
        let mut other = test_config();
        other.jwt_secret = "other-secret".to_string();
        let token = token_for(UserRole::User, &other);

        let response = app(config)
            .oneshot(request("/protected", Some(&format!("token={}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_passes_with_identity_attached() {
        let config = test_config();
        let token = token_for(UserRole::User, &config);

        let response = app(config)
            .oneshot(request("/protected", Some(&format!("token={}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert_eq!(&body[..], b"a@x.com");
    }

    #[tokio::test]
    async fn admin_gate_rejects_plain_users() {
        let config = test_config();
        let user_token = token_for(UserRole::User, &config);
        let admin_token = token_for(UserRole::Admin, &config);

        let response = app(config.clone())
            .oneshot(request("/admin", Some(&format!("token={}", user_token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app(config)
            .oneshot(request("/admin", Some(&format!("token={}", admin_token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
